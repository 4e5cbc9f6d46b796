//! NeoWs feed payload types.
//!
//! Mirrors the JSON returned by `GET /feed`. The API sends most measurements
//! as decimal strings; they are kept verbatim and parsed on demand so one bad
//! number never rejects a whole feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level `/feed` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub element_count: usize,
    /// Records grouped by calendar date (`YYYY-MM-DD`), date-ordered.
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<NeoRecord>>,
}

impl FeedResponse {
    /// All records in date order.
    pub fn flatten(self) -> Vec<NeoRecord> {
        self.near_earth_objects.into_values().flatten().collect()
    }
}

/// A single near-Earth object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: Option<String>,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub is_sentry_object: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

impl NeoRecord {
    /// Smallest parsable miss distance over all approaches, in kilometers.
    pub fn nearest_miss_km(&self) -> Option<f64> {
        self.close_approach_data
            .iter()
            .filter_map(|a| a.miss_distance.kilometers())
            .min_by(f64::total_cmp)
    }

    /// Smallest parsable miss distance over all approaches, in AU.
    pub fn nearest_miss_au(&self) -> Option<f64> {
        self.close_approach_data
            .iter()
            .filter_map(|a| a.miss_distance.astronomical())
            .min_by(f64::total_cmp)
    }

    /// First listed close approach, as the upstream API orders them.
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }

    /// Whether any approach comes closer than `threshold_au`.
    pub fn passes_within_au(&self, threshold_au: f64) -> bool {
        self.close_approach_data
            .iter()
            .filter_map(|a| a.miss_distance.astronomical())
            .any(|au| au < threshold_au)
    }
}

/// Diameter bounds in every unit system the API reports.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
    pub meters: DiameterRange,
    pub miles: DiameterRange,
    pub feet: DiameterRange,
}

/// Min/max estimate of a diameter in one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl DiameterRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            estimated_diameter_min: min,
            estimated_diameter_max: max,
        }
    }
}

/// One close approach of a NEO to a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: String,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    #[serde(default)]
    pub epoch_date_close_approach: Option<i64>,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    #[serde(default)]
    pub orbiting_body: String,
}

impl CloseApproach {
    /// Full timestamp when present, otherwise the date.
    pub fn display_date(&self) -> &str {
        self.close_approach_date_full
            .as_deref()
            .unwrap_or(&self.close_approach_date)
    }
}

/// Relative velocity at closest approach, as decimal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelativeVelocity {
    #[serde(default)]
    pub kilometers_per_second: String,
    #[serde(default)]
    pub kilometers_per_hour: String,
    #[serde(default)]
    pub miles_per_hour: String,
}

impl RelativeVelocity {
    pub fn kilometers_per_hour(&self) -> Option<f64> {
        parse_measure(&self.kilometers_per_hour)
    }
}

/// Miss distance at closest approach, as decimal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissDistance {
    #[serde(default)]
    pub astronomical: String,
    #[serde(default)]
    pub lunar: String,
    #[serde(default)]
    pub kilometers: String,
    #[serde(default)]
    pub miles: String,
}

impl MissDistance {
    pub fn kilometers(&self) -> Option<f64> {
        parse_measure(&self.kilometers)
    }

    pub fn astronomical(&self) -> Option<f64> {
        parse_measure(&self.astronomical)
    }
}

/// Parse a finite decimal measurement, tolerating surrounding whitespace.
pub fn parse_measure(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
