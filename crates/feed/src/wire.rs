//! Wire format of the NeoWs `feed` endpoint.
//!
//! Only the fields the demo reads are modeled; everything else in the
//! response is ignored by serde. Numeric approach figures arrive as JSON
//! strings and are parsed downstream.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    /// Date (`YYYY-MM-DD`) to the objects approaching on that date.
    /// A sorted map so flattening is deterministic.
    pub near_earth_objects: BTreeMap<String, Vec<NeoObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoObject {
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: String,
    pub miss_distance: MissDistance,
    pub relative_velocity: RelativeVelocity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_hour: String,
}
