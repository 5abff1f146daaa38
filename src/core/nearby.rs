use crate::core::distance::planar_score;
use crate::core::filters::{matches_food_item, matches_status, non_empty};
use crate::models::{FoodTruck, ScoredMatch};

/// Number of results returned when the caller does not ask for a limit
pub const DEFAULT_NEARBY_LIMIT: usize = 5;

/// Which permit statuses take part in a nearby search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusGate {
    /// Only records whose status equals this value, ignoring case
    Only(String),
    /// Every status
    Any,
}

impl StatusGate {
    pub const DEFAULT_STATUS: &'static str = "APPROVED";
    const ALL: &'static str = "ALL";

    /// Interpret the optional `status` parameter
    ///
    /// Absent or empty means the default (`APPROVED`), `ALL` in any case disables the gate.
    pub fn from_param(status: Option<&str>) -> Self {
        match non_empty(status) {
            None => Self::default(),
            Some(s) if s.eq_ignore_ascii_case(Self::ALL) => Self::Any,
            Some(s) => Self::Only(s.to_string()),
        }
    }
}

impl Default for StatusGate {
    fn default() -> Self {
        Self::Only(Self::DEFAULT_STATUS.to_string())
    }
}

/// Parameters of a nearest-trucks query
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery<'a> {
    pub lat: f64,
    pub lng: f64,
    pub status: StatusGate,
    /// Must be positive; enforced at the HTTP boundary
    pub limit: usize,
    pub food_item: Option<&'a str>,
}

impl<'a> NearbyQuery<'a> {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            status: StatusGate::default(),
            limit: DEFAULT_NEARBY_LIMIT,
            food_item: None,
        }
    }

    pub fn with_status(mut self, status: StatusGate) -> Self {
        self.status = status;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_food_item(mut self, food_item: Option<&'a str>) -> Self {
        self.food_item = non_empty(food_item);
        self
    }
}

/// Find the trucks closest to the query point
///
/// # Pipeline Stages
/// 1. Status gate
/// 2. Food item gate
/// 3. Coordinate gate (records without latitude or longitude are dropped)
/// 4. Planar scoring, stable ascending sort, truncation to `limit`
pub fn nearest_trucks<'t>(trucks: &'t [FoodTruck], query: &NearbyQuery<'_>) -> Vec<ScoredMatch<'t>> {
    let wanted_status = match &query.status {
        StatusGate::Only(status) => Some(status.to_uppercase()),
        StatusGate::Any => None,
    };
    let food_needle = query.food_item.map(str::to_lowercase);

    let mut scored: Vec<ScoredMatch<'t>> = trucks
        .iter()
        // Stage 1: status gate
        .filter(|truck| {
            wanted_status
                .as_deref()
                .map_or(true, |status| matches_status(truck, status))
        })
        // Stage 2: food item gate
        .filter(|truck| {
            food_needle
                .as_deref()
                .map_or(true, |needle| matches_food_item(truck, needle))
        })
        // Stage 3 & 4: coordinate gate and scoring
        .filter_map(|truck| {
            let (lat, lng) = truck.coordinates()?;
            Some(ScoredMatch {
                distance_score: planar_score(query.lat, query.lng, lat, lng),
                truck,
            })
        })
        .collect();

    // Stable: equal scores keep input order
    scored.sort_by(|a, b| a.distance_score.total_cmp(&b.distance_score));
    scored.truncate(query.limit);

    scored
}
