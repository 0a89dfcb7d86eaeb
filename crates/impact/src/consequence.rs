use terrain::TerrainLabel;

use crate::category::{SizeCategory, size_category};

/// Severity banding shown with a consequence record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeverityTier {
    Safe,
    Regional,
    Continental,
    Extinction,
    /// Defensive default only; unreachable while the bucket table is
    /// exhaustive.
    Assessing,
}

/// One cell of the consequence table. Static and never mutated; formatting
/// live figures into the display is the presentation layer's job.
#[derive(Debug, PartialEq, Eq)]
pub struct ConsequenceRecord {
    pub title: &'static str,
    pub severity: SeverityTier,
    pub body: &'static str,
}

/// An impactor arriving at the surface: built at the moment the flight
/// reaches its target, consumed immediately by [`select_consequence`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImpactEvent {
    /// Initial diameter of the body, before atmospheric ablation.
    pub diameter_m: f64,
    pub terrain: TerrainLabel,
}

impl ImpactEvent {
    pub fn new(diameter_m: f64, terrain: TerrainLabel) -> Self {
        Self {
            diameter_m,
            terrain,
        }
    }
}

pub static DISINTEGRATED: ConsequenceRecord = ConsequenceRecord {
    title: "Atmospheric disintegration",
    severity: SeverityTier::Safe,
    body: "\
The asteroid breaks up completely in the atmosphere before reaching the surface.
- Airburst only; nothing arrives at ground level
- Possible bright flash visible over a wide area
- No surface damage
- Small, harmless fragments may survive as meteorites",
};

static OCEAN_SMALL: ConsequenceRecord = ConsequenceRecord {
    title: "Regional ocean impact",
    severity: SeverityTier::Regional,
    body: "\
A large volume of water is displaced and a submarine crater forms.
- Collapsing water column feeds a regional tsunami
- Significant waves propagating tens to hundreds of kilometers
- Serious coastal flooding; wave height depends on depth and distance",
};

static OCEAN_MEDIUM: ConsequenceRecord = ConsequenceRecord {
    title: "Ocean-basin mega-tsunami",
    severity: SeverityTier::Continental,
    body: "\
Massive ejection of water, rock and steam at the impact site.
- Waves hundreds of meters high near the impact
- Tsunami crossing entire ocean basins
- Widespread coastal flooding and infrastructure loss across many countries
- Millions of people affected",
};

static OCEAN_CATASTROPHIC: ConsequenceRecord = ConsequenceRecord {
    title: "Extinction-level ocean impact",
    severity: SeverityTier::Extinction,
    body: "\
A transoceanic tsunami with colossal initial wave heights.
- Every coastline of the basin devastated
- Massive ejecta injected into the atmosphere
- Global impact winter from blocked sunlight
- Collapse of marine and terrestrial ecosystems",
};

static LAND_SMALL: ConsequenceRecord = ConsequenceRecord {
    title: "Devastating land impact",
    severity: SeverityTier::Regional,
    body: "\
A direct strike cratering several kilometers of ground.
- Intense regional shock wave and local earthquake
- Serious damage across hundreds of square kilometers
- Mass fires from thermal radiation
- Cities in the impact zone destroyed",
};

static LAND_MEDIUM: ConsequenceRecord = ConsequenceRecord {
    title: "Continental impact",
    severity: SeverityTier::Continental,
    body: "\
A crater tens of kilometers across with massive dust injection.
- Strong earthquakes (above magnitude 7) over a wide area
- Secondary tsunamis if an ocean is nearby
- Regional cooling from blocked sunlight lasting years
- Crop failure across the affected continent",
};

static LAND_CATASTROPHIC: ConsequenceRecord = ConsequenceRecord {
    title: "Extinction-level land impact",
    severity: SeverityTier::Extinction,
    body: "\
A crater hundreds of kilometers across and instant global fires.
- Dust and soot injection blocking the sun worldwide
- Earthquakes above magnitude 9 planet-wide
- Photosynthesis collapse and impact winter lasting years to decades
- Global famine and complete ecological collapse",
};

/// Defensive default; never selected while bucketing stays exhaustive.
pub static ASSESSING: ConsequenceRecord = ConsequenceRecord {
    title: "Unclassified impact",
    severity: SeverityTier::Assessing,
    body: "Impact consequences are still being evaluated.",
};

/// Two-key decision table: size bucket, then terrain.
///
/// Disintegration short-circuits before terrain is considered. `Unknown`
/// terrain falls back to the land column, matching how the marker and
/// crater styling treat it.
pub fn select_consequence(event: ImpactEvent) -> &'static ConsequenceRecord {
    let category = size_category(event.diameter_m);
    if category == SizeCategory::Disintegrated {
        return &DISINTEGRATED;
    }

    let is_ocean = event.terrain == TerrainLabel::Water;
    match (is_ocean, category) {
        (true, SizeCategory::Small) => &OCEAN_SMALL,
        (true, SizeCategory::Medium) => &OCEAN_MEDIUM,
        (true, SizeCategory::Catastrophic) => &OCEAN_CATASTROPHIC,
        (false, SizeCategory::Small) => &LAND_SMALL,
        (false, SizeCategory::Medium) => &LAND_MEDIUM,
        (false, SizeCategory::Catastrophic) => &LAND_CATASTROPHIC,
        (_, SizeCategory::Disintegrated) => &ASSESSING,
    }
}
