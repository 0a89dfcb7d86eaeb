//! Text rendering for the side panel and console lines.
//!
//! The core hands over records and figures; everything user-visible is
//! formatted here.

use feed::NeoApproach;
use foundation::math::GeoCoordinate;
use impact::{ConsequenceRecord, SeverityTier};
use sim::ApproachReadout;
use terrain::TerrainLabel;

pub fn terrain_name(label: TerrainLabel) -> &'static str {
    match label {
        TerrainLabel::Land => "Land",
        TerrainLabel::Water => "Water",
        TerrainLabel::Unknown => "Unknown",
    }
}

pub fn marker_color_name(label: TerrainLabel) -> &'static str {
    match label {
        TerrainLabel::Water => "blue",
        TerrainLabel::Land | TerrainLabel::Unknown => "red",
    }
}

pub fn severity_name(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::Safe => "SAFE",
        SeverityTier::Regional => "REGIONAL DANGER",
        SeverityTier::Continental => "CONTINENTAL CATASTROPHE",
        SeverityTier::Extinction => "GLOBAL EXTINCTION",
        SeverityTier::Assessing => "ASSESSING",
    }
}

pub fn render_roster(approaches: &[NeoApproach]) -> String {
    let mut out = String::from("Closest approaches this week:\n");
    for (i, a) in approaches.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} - {:.0} km on {} (~{:.0} m, {:.0} km/h)\n",
            i + 1,
            a.name,
            a.miss_distance_km,
            a.close_approach_date,
            a.estimated_diameter_m,
            a.relative_velocity_kmh,
        ));
    }
    out
}

pub fn render_target_line(geo: GeoCoordinate, label: TerrainLabel) -> String {
    format!(
        "Target: {} (lat {:.1}°, lon {:.1}°), marker {}",
        terrain_name(label),
        geo.lat_deg,
        geo.lon_deg,
        marker_color_name(label),
    )
}

pub fn render_panel(
    record: &ConsequenceRecord,
    approach: &NeoApproach,
    readout: &ApproachReadout,
    geo: GeoCoordinate,
    label: TerrainLabel,
) -> String {
    let mut out = String::new();
    out.push_str("========================================\n");
    out.push_str(&format!("  {}\n", severity_name(record.severity)));
    out.push_str(&format!("  {}\n", record.title));
    out.push_str("----------------------------------------\n");
    out.push_str(&format!("Object: {}\n", approach.name));
    out.push_str(&format!(
        "Location: {} (lat {:.1}°, lon {:.1}°)\n",
        terrain_name(label),
        geo.lat_deg,
        geo.lon_deg
    ));
    out.push_str(&format!("Initial diameter: {:.1} m\n", approach.estimated_diameter_m));
    out.push_str(&format!("Diameter at impact: {:.1} m\n", readout.diameter_m));
    out.push_str(&format!("Velocity at impact: {:.0} km/h\n", readout.velocity_kmh));
    out.push('\n');
    out.push_str(record.body);
    out.push_str("\n========================================\n");
    out
}
