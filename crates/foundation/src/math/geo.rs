use super::Vec3;

/// Geographic coordinates in degrees on the demo globe.
///
/// The globe is a unit sphere in a y-up frame: latitude is measured from the
/// equator toward +y, longitude from +x toward +z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoCoordinate {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoCoordinate {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Inverts a surface point into latitude/longitude.
    ///
    /// The point does not need to be exactly unit length (picked points carry
    /// numerical drift); latitude is derived from the actual radius.
    pub fn from_surface_point(p: Vec3) -> Option<Self> {
        let r = p.length();
        if r <= 0.0 {
            return None;
        }
        let lat = (p.y / r).asin().to_degrees();
        let lon = p.z.atan2(p.x).to_degrees();
        Some(Self::new(lat, lon))
    }

    /// Point on the unit sphere under this coordinate.
    pub fn to_unit_sphere(self) -> Vec3 {
        let lat = self.lat_deg.to_radians();
        let lon = self.lon_deg.to_radians();
        Vec3::new(
            lat.cos() * lon.cos(),
            lat.sin(),
            lat.cos() * lon.sin(),
        )
    }
}

/// Wraps a longitude into `[-180, 180]` by repeated ±360 steps.
///
/// Inputs far outside the canonical range are legal; picked coordinates and
/// feed data may carry whole extra turns.
pub fn normalize_lon(lon_deg: f64) -> f64 {
    let mut lon = lon_deg;
    while lon < -180.0 {
        lon += 360.0;
    }
    while lon > 180.0 {
        lon -= 360.0;
    }
    lon
}

#[cfg(test)]
mod tests {
    use super::{GeoCoordinate, normalize_lon};
    use crate::math::Vec3;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn normalize_lon_wraps_whole_turns() {
        assert_close(normalize_lon(190.0), -170.0, 1e-12);
        assert_close(normalize_lon(-190.0), 170.0, 1e-12);
        assert_close(normalize_lon(45.0 + 720.0), 45.0, 1e-12);
        assert_close(normalize_lon(45.0 - 1080.0), 45.0, 1e-12);
        assert_close(normalize_lon(0.0), 0.0, 1e-12);
    }

    #[test]
    fn unit_sphere_round_trip() {
        let geo = GeoCoordinate::new(30.0, 45.0);
        let p = geo.to_unit_sphere();
        assert_close(p.length(), 1.0, 1e-12);
        let rt = GeoCoordinate::from_surface_point(p).unwrap();
        assert_close(rt.lat_deg, geo.lat_deg, 1e-9);
        assert_close(rt.lon_deg, geo.lon_deg, 1e-9);
    }

    #[test]
    fn from_surface_point_tolerates_non_unit_radius() {
        let geo = GeoCoordinate::new(-12.5, 160.0);
        let p = geo.to_unit_sphere() * 1.02;
        let rt = GeoCoordinate::from_surface_point(p).unwrap();
        assert_close(rt.lat_deg, geo.lat_deg, 1e-9);
        assert_close(rt.lon_deg, geo.lon_deg, 1e-9);
    }

    #[test]
    fn from_surface_point_rejects_origin() {
        assert_eq!(
            GeoCoordinate::from_surface_point(Vec3::new(0.0, 0.0, 0.0)),
            None
        );
    }

    #[test]
    fn poles_map_to_y_axis() {
        let north = GeoCoordinate::new(90.0, 0.0).to_unit_sphere();
        assert_close(north.y, 1.0, 1e-12);
        let south = GeoCoordinate::new(-90.0, 0.0).to_unit_sphere();
        assert_close(south.y, -1.0, 1e-12);
    }
}
