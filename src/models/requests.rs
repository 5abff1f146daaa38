use serde::Deserialize;
use validator::Validate;

use crate::core::filters::TruckFilter;
use crate::core::nearby::{NearbyQuery, StatusGate, DEFAULT_NEARBY_LIMIT};

/// Query parameters for listing food trucks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTrucksRequest {
    pub applicant: Option<String>,
    pub status: Option<String>,
    pub street: Option<String>,
    pub fooditem: Option<String>,
}

impl ListTrucksRequest {
    pub fn as_filter(&self) -> TruckFilter<'_> {
        TruckFilter::new(
            self.applicant.as_deref(),
            self.status.as_deref(),
            self.street.as_deref(),
            self.fooditem.as_deref(),
        )
    }
}

/// Query parameters for the nearby search
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NearbyTrucksRequest {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_status")]
    pub status: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub fooditem: Option<String>,
}

fn default_status() -> Option<String> {
    Some(StatusGate::DEFAULT_STATUS.to_string())
}

fn default_limit() -> usize {
    DEFAULT_NEARBY_LIMIT
}

impl NearbyTrucksRequest {
    /// Whether both coordinates are real numbers
    pub fn has_finite_coordinates(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    pub fn as_query(&self) -> NearbyQuery<'_> {
        NearbyQuery::new(self.lat, self.lng)
            .with_status(StatusGate::from_param(self.status.as_deref()))
            .with_limit(self.limit)
            .with_food_item(self.fooditem.as_deref())
    }
}
