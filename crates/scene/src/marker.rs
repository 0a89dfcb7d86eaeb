use terrain::TerrainLabel;

/// RGBA style for the target ring marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: [f32; 4],
}

/// RGBA style for the crater decal left after an impact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CraterStyle {
    pub color: [f32; 4],
}

/// Marker tint by terrain under the target: ocean blue, land red.
/// An unclassified target renders like land until the classifier is ready.
pub fn marker_style(label: TerrainLabel) -> MarkerStyle {
    let color = match label {
        TerrainLabel::Water => [0.0, 0.4, 1.0, 0.6],
        TerrainLabel::Land | TerrainLabel::Unknown => [1.0, 0.0, 0.0, 0.6],
    };
    MarkerStyle { color }
}

/// Crater decal by terrain: a faint deep-blue splash on water, an opaque
/// brown scar on land.
pub fn crater_style(label: TerrainLabel) -> CraterStyle {
    let color = match label {
        TerrainLabel::Water => [0.0, 0.4, 0.667, 0.4],
        TerrainLabel::Land | TerrainLabel::Unknown => [0.4, 0.2, 0.0, 0.9],
    };
    CraterStyle { color }
}
