//! Foodtruck API - read-only query service over the SF mobile food facility permits
//!
//! The dataset is loaded once at startup into an immutable [`Snapshot`]. Requests are
//! answered by the substring filter engine and the proximity ranker in [`core`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_trucks, nearest_trucks, planar_score, NearbyQuery, StatusGate, TruckFilter};
pub use models::{FoodTruck, ScoredMatch, Snapshot, parse_optional_float};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let trucks = vec![FoodTruck::new("1", "TOASTY TRUCK", "APPROVED")];
        assert_eq!(filter_trucks(&trucks, &TruckFilter::default()).len(), 1);
        assert!(nearest_trucks(&trucks, &NearbyQuery::new(37.79, -122.40)).is_empty());
    }
}
