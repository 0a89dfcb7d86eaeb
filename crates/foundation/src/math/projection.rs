use super::geo::{GeoCoordinate, normalize_lon};

/// Normalized equirectangular texture coordinates in `(0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

/// Margin kept from the exact raster border when projecting.
///
/// Clamping to `[UV_BORDER, 1 - UV_BORDER]` keeps the poles and the
/// antimeridian strictly inside the image, so a projected coordinate can
/// never index outside the raster.
pub const UV_BORDER: f64 = 0.001;

/// Equirectangular projection of a geographic coordinate.
///
/// Longitude is wrapped into `[-180, 180]` first, so any number of whole
/// turns projects to the same texel.
pub fn geo_to_uv(geo: GeoCoordinate) -> Uv {
    let lon = normalize_lon(geo.lon_deg);
    let u = (lon + 180.0) / 360.0;
    let v = (90.0 - geo.lat_deg) / 180.0;
    Uv {
        u: u.clamp(UV_BORDER, 1.0 - UV_BORDER),
        v: v.clamp(UV_BORDER, 1.0 - UV_BORDER),
    }
}

/// Integer pixel under a uv coordinate for a `width` x `height` raster.
///
/// `v` is flipped before the row lookup, matching the row order the
/// brightness raster is sampled in.
pub fn uv_to_pixel(uv: Uv, width: u32, height: u32) -> (u32, u32) {
    let x = (uv.u * (width.saturating_sub(1)) as f64).floor() as u32;
    let y = ((1.0 - uv.v) * (height.saturating_sub(1)) as f64).floor() as u32;
    (x, y)
}
