use foundation::math::{GeoCoordinate, Vec3};

/// The demo globe is a unit sphere centered at the origin.
pub const GLOBE_RADIUS: f64 = 1.0;

/// Anchor point on the globe surface under a coordinate: where the target
/// marker sits and where a falling meteor is aimed.
pub fn surface_point(geo: GeoCoordinate) -> Vec3 {
    geo.to_unit_sphere() * GLOBE_RADIUS
}

#[cfg(test)]
mod tests {
    use super::{GLOBE_RADIUS, surface_point};
    use foundation::math::GeoCoordinate;

    #[test]
    fn surface_points_sit_on_the_sphere() {
        for (lat, lon) in [(0.0, 0.0), (30.0, 45.0), (-60.0, 170.0), (90.0, 0.0)] {
            let p = surface_point(GeoCoordinate::new(lat, lon));
            assert!((p.length() - GLOBE_RADIUS).abs() < 1e-12);
        }
    }
}
