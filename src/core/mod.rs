// Core query engine exports
pub mod distance;
pub mod filters;
pub mod nearby;

pub use distance::planar_score;
pub use filters::{filter_trucks, TruckFilter};
pub use nearby::{nearest_trucks, NearbyQuery, StatusGate, DEFAULT_NEARBY_LIMIT};
