// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FoodTruck, ScoredMatch, Snapshot, parse_optional_float};
pub use requests::{ListTrucksRequest, NearbyTrucksRequest};
pub use responses::{HealthResponse, ErrorResponse};
