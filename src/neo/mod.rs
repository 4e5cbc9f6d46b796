//! Near-Earth object data: feed payload types, the HTTP provider and the
//! background loader that publishes records into the world.

pub mod feed;
pub mod loader;
pub mod record;

pub use feed::{FeedClient, FeedError};
pub use loader::{FeedFetch, FeedPlugin, FeedRefreshRequested, FeedState};
pub use record::{CloseApproach, DiameterRange, EstimatedDiameter, NeoRecord};

use bevy::prelude::*;

/// Records of the current fetch cycle, flattened in date order.
///
/// Replaced wholesale when a fetch completes; an empty set is a valid feed.
#[derive(Resource, Clone, Debug, Default)]
pub struct NeoFeed {
    pub records: Vec<NeoRecord>,
}

impl NeoFeed {
    pub fn new(records: Vec<NeoRecord>) -> Self {
        Self { records }
    }

    pub fn hazardous_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.is_potentially_hazardous_asteroid)
            .count()
    }
}

/// Inspectable data attached to a placed object through the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoMetadata {
    pub id: String,
    pub name: String,
    pub diameter_meters: DiameterRange,
    pub diameter_miles: DiameterRange,
    pub is_hazardous: bool,
    /// Nearest miss distance in kilometers, if any approach is parsable.
    pub miss_distance_km: Option<f64>,
}

impl From<&NeoRecord> for NeoMetadata {
    fn from(record: &NeoRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            diameter_meters: record.estimated_diameter.meters,
            diameter_miles: record.estimated_diameter.miles,
            is_hazardous: record.is_potentially_hazardous_asteroid,
            miss_distance_km: record.nearest_miss_km(),
        }
    }
}
