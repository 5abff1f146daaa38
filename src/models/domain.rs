use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One permitted mobile food facility from the dataset
///
/// Optional descriptive fields keep `None` distinct from an empty string.
/// Deserializing goes through [`FoodTruck::from_row`], so it never fails on a bad field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct FoodTruck {
    pub locationid: String,
    pub applicant: String,
    pub status: String,

    pub facilitytype: Option<String>,
    pub locationdescription: Option<String>,
    pub address: Option<String>,
    pub blocklot: Option<String>,
    pub block: Option<String>,
    pub lot: Option<String>,
    pub permit: Option<String>,
    pub fooditems: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Dataset-specific planar coordinates, not used for ranking
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl FoodTruck {
    /// Create a record with only the required fields set
    pub fn new(
        locationid: impl Into<String>,
        applicant: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            locationid: locationid.into(),
            applicant: applicant.into(),
            status: status.into(),
            facilitytype: None,
            locationdescription: None,
            address: None,
            blocklot: None,
            block: None,
            lot: None,
            permit: None,
            fooditems: None,
            latitude: None,
            longitude: None,
            x: None,
            y: None,
        }
    }

    /// Build a record from one raw dataset row
    ///
    /// Never fails: a missing or malformed field only clears that field.
    pub fn from_row(row: &Map<String, Value>) -> Self {
        Self {
            locationid: optional_string(row.get("locationid")).unwrap_or_default(),
            applicant: optional_string(row.get("applicant")).unwrap_or_default(),
            status: optional_string(row.get("status")).unwrap_or_default(),
            facilitytype: optional_string(row.get("facilitytype")),
            locationdescription: optional_string(row.get("locationdescription")),
            address: optional_string(row.get("address")),
            blocklot: optional_string(row.get("blocklot")),
            block: optional_string(row.get("block")),
            lot: optional_string(row.get("lot")),
            permit: optional_string(row.get("permit")),
            fooditems: optional_string(row.get("fooditems")),
            latitude: parse_optional_float(row.get("latitude")),
            longitude: parse_optional_float(row.get("longitude")),
            x: parse_optional_float(row.get("x")),
            y: parse_optional_float(row.get("y")),
        }
    }

    /// Both coordinates, if the record has them
    #[inline]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl From<Map<String, Value>> for FoodTruck {
    fn from(row: Map<String, Value>) -> Self {
        Self::from_row(&row)
    }
}

/// Coerce a raw dataset value into a float
///
/// Null, missing, empty, unparseable and non-finite values all map to `None`.
pub fn parse_optional_float(raw: Option<&Value>) -> Option<f64> {
    let value = match raw? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    value.is_finite().then_some(value)
}

fn optional_string(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A record paired with its relative-distance score for one query
///
/// `distance_score` is a unitless ordering key, not a physical distance.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMatch<'a> {
    pub distance_score: f64,
    pub truck: &'a FoodTruck,
}

/// Immutable set of records loaded once at startup
#[derive(Debug, Clone)]
pub struct Snapshot {
    trucks: Vec<FoodTruck>,
    loaded_at: DateTime<Utc>,
    source: Option<String>,
}

impl Snapshot {
    pub fn new(trucks: Vec<FoodTruck>, source: impl Into<String>) -> Self {
        Self {
            trucks,
            loaded_at: Utc::now(),
            source: Some(source.into()),
        }
    }

    /// The degraded state used when the dataset could not be loaded
    pub fn empty() -> Self {
        Self {
            trucks: Vec::new(),
            loaded_at: Utc::now(),
            source: None,
        }
    }

    pub fn trucks(&self) -> &[FoodTruck] {
        &self.trucks
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
