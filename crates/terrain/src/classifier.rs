use std::collections::BTreeMap;

use foundation::math::{GeoCoordinate, geo_to_uv, uv_to_pixel};
use runtime::Metrics;

use crate::brightness::BrightnessSource;

/// Land/water label under a geographic coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TerrainLabel {
    Land,
    Water,
    /// The brightness map has not been attached yet.
    Unknown,
}

/// Brightness values strictly above this read as water.
///
/// The backing raster is a specular map: oceans are bright, landmasses dark.
/// A fixed threshold, not a calibrated model; no coastline nuance, no
/// ice/desert distinction.
pub const WATER_BRIGHTNESS: u8 = 100;

/// Classification results are cached per one-decimal-degree cell (~11 km),
/// so repeated queries around the same target skip the pixel read.
fn cell_key(lat_deg: f64, lon_deg: f64) -> (i32, i32) {
    ((lat_deg * 10.0).round() as i32, (lon_deg * 10.0).round() as i32)
}

pub const METRIC_PIXEL_READS: &str = "classifier.pixel_reads";
pub const METRIC_CACHE_HITS: &str = "classifier.cache_hits";

/// Terrain classifier over a brightness raster.
///
/// Starts detached and answers `Unknown` (uncached) until a source is
/// attached exactly once; after that every query resolves to `Land` or
/// `Water`. The cache is append-only for the session: the source is
/// immutable after attach, so a computed cell never changes.
pub struct TerrainClassifier {
    source: Option<Box<dyn BrightnessSource>>,
    cache: BTreeMap<(i32, i32), TerrainLabel>,
    metrics: Metrics,
}

impl TerrainClassifier {
    pub fn new() -> Self {
        Self {
            source: None,
            cache: BTreeMap::new(),
            metrics: Metrics::new(),
        }
    }

    /// Attaches the decoded brightness source, flipping readiness.
    pub fn attach(&mut self, source: Box<dyn BrightnessSource>) {
        self.source = Some(source);
    }

    pub fn is_ready(&self) -> bool {
        self.source.is_some()
    }

    pub fn cached_cells(&self) -> usize {
        self.cache.len()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Classifies a coordinate; longitude may be any number of turns outside
    /// `[-180, 180]` (picking drift), it projects to the same texel.
    pub fn classify(&mut self, lat_deg: f64, lon_deg: f64) -> TerrainLabel {
        let Some(source) = self.source.as_deref() else {
            return TerrainLabel::Unknown;
        };

        let key = cell_key(lat_deg, lon_deg);
        if let Some(label) = self.cache.get(&key) {
            self.metrics.inc_counter(METRIC_CACHE_HITS, 1);
            return *label;
        }

        let uv = geo_to_uv(GeoCoordinate::new(lat_deg, lon_deg));
        let (x, y) = uv_to_pixel(uv, source.width(), source.height());
        let brightness = source.red_at(x, y);
        self.metrics.inc_counter(METRIC_PIXEL_READS, 1);

        let label = if brightness > WATER_BRIGHTNESS {
            TerrainLabel::Water
        } else {
            TerrainLabel::Land
        };
        self.cache.insert(key, label);
        label
    }
}

impl Default for TerrainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        METRIC_CACHE_HITS, METRIC_PIXEL_READS, TerrainClassifier, TerrainLabel,
    };
    use crate::brightness::BrightnessSource;

    /// Uniform-brightness raster for threshold tests.
    struct Flat {
        brightness: u8,
    }

    impl BrightnessSource for Flat {
        fn width(&self) -> u32 {
            1024
        }

        fn height(&self) -> u32 {
            512
        }

        fn red_at(&self, _x: u32, _y: u32) -> u8 {
            self.brightness
        }
    }

    fn ready(brightness: u8) -> TerrainClassifier {
        let mut c = TerrainClassifier::new();
        c.attach(Box::new(Flat { brightness }));
        c
    }

    #[test]
    fn unknown_until_attached_and_never_after() {
        let mut c = TerrainClassifier::new();
        assert!(!c.is_ready());
        assert_eq!(c.classify(30.0, 45.0), TerrainLabel::Unknown);
        // Not-ready queries must not poison the cache.
        assert_eq!(c.cached_cells(), 0);

        c.attach(Box::new(Flat { brightness: 180 }));
        assert!(c.is_ready());
        assert_eq!(c.classify(30.0, 45.0), TerrainLabel::Water);
    }

    #[test]
    fn bright_is_water_dark_is_land() {
        assert_eq!(ready(180).classify(10.0, 10.0), TerrainLabel::Water);
        assert_eq!(ready(40).classify(10.0, 10.0), TerrainLabel::Land);
        // Exactly at the threshold reads as land (strictly-greater test).
        assert_eq!(ready(100).classify(10.0, 10.0), TerrainLabel::Land);
        assert_eq!(ready(101).classify(10.0, 10.0), TerrainLabel::Water);
    }

    #[test]
    fn wrapped_longitude_classifies_identically() {
        let mut c = ready(180);
        let base = c.classify(15.0, 45.0);
        for k in [-2.0, 1.0, 3.0] {
            assert_eq!(c.classify(15.0, 45.0 + 360.0 * k), base);
        }
    }

    #[test]
    fn nearby_queries_share_one_pixel_read() {
        let mut c = ready(40);
        // Both round to the (302, 451) cell.
        let a = c.classify(30.24, 45.06);
        let b = c.classify(30.16, 45.14);
        assert_eq!(a, b);
        assert_eq!(c.metrics().counter(METRIC_PIXEL_READS), 1);
        assert_eq!(c.metrics().counter(METRIC_CACHE_HITS), 1);
        assert_eq!(c.cached_cells(), 1);
    }

    #[test]
    fn distinct_cells_read_distinct_pixels() {
        let mut c = ready(40);
        c.classify(30.0, 45.0);
        c.classify(31.0, 45.0);
        assert_eq!(c.metrics().counter(METRIC_PIXEL_READS), 2);
        assert_eq!(c.metrics().counter(METRIC_CACHE_HITS), 0);
    }

    #[test]
    fn poles_and_antimeridian_do_not_panic() {
        let mut c = ready(180);
        assert_eq!(c.classify(90.0, 180.0), TerrainLabel::Water);
        assert_eq!(c.classify(-90.0, -180.0), TerrainLabel::Water);
    }
}
