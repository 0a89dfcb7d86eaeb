use feed::NeoApproach;

use crate::flight::IMPACT_PROGRESS;

/// Diameters above this ablate to half their initial size on the way down;
/// smaller bodies burn away entirely before arrival.
pub const ABLATION_CUTOFF_M: f64 = 50.0;

/// Atmospheric entry accelerates the body up to 1.5x its approach velocity.
pub const MAX_VELOCITY_MULTIPLIER: f64 = 1.5;

/// Progressive panel figures for a flight in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ApproachReadout {
    pub distance_km: f64,
    pub diameter_m: f64,
    pub velocity_kmh: f64,
}

/// Interpolates the live panel figures at flight `progress` (0..1).
///
/// The flight arrives at progress 0.95, so progress is rescaled to hit the
/// terminal figures exactly at arrival: distance zero, diameter at its
/// ablated value, velocity at the full multiplier.
pub fn approach_readout(approach: &NeoApproach, progress: f64) -> ApproachReadout {
    let p = (progress / IMPACT_PROGRESS).clamp(0.0, 1.0);

    let initial = approach.estimated_diameter_m;
    let diameter_m = if initial > ABLATION_CUTOFF_M {
        // Large bodies lose half their diameter to ablation.
        initial - initial * 0.5 * p
    } else if p >= IMPACT_PROGRESS {
        // Small bodies are gone before the ground.
        0.0
    } else {
        initial * (1.0 - p)
    };

    ApproachReadout {
        distance_km: approach.miss_distance_km * (1.0 - p),
        diameter_m,
        velocity_kmh: approach.relative_velocity_kmh
            * (1.0 + (MAX_VELOCITY_MULTIPLIER - 1.0) * p),
    }
}

#[cfg(test)]
mod tests {
    use super::approach_readout;
    use crate::flight::IMPACT_PROGRESS;
    use feed::NeoApproach;

    fn approach(diameter_m: f64) -> NeoApproach {
        NeoApproach {
            name: "2024 PT5".to_string(),
            close_approach_date: "2026-08-06".to_string(),
            miss_distance_km: 384_400.0,
            estimated_diameter_m: diameter_m,
            relative_velocity_kmh: 30_000.0,
        }
    }

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn starts_at_the_initial_figures() {
        let r = approach_readout(&approach(200.0), 0.0);
        assert_close(r.distance_km, 384_400.0, 1e-9);
        assert_close(r.diameter_m, 200.0, 1e-9);
        assert_close(r.velocity_kmh, 30_000.0, 1e-9);
    }

    #[test]
    fn large_bodies_arrive_at_half_diameter() {
        let r = approach_readout(&approach(200.0), IMPACT_PROGRESS);
        assert_close(r.diameter_m, 100.0, 1e-9);
        assert_close(r.distance_km, 0.0, 1e-9);
        assert_close(r.velocity_kmh, 45_000.0, 1e-9);
    }

    #[test]
    fn small_bodies_arrive_fully_ablated() {
        let r = approach_readout(&approach(30.0), IMPACT_PROGRESS);
        assert_close(r.diameter_m, 0.0, 1e-9);
    }

    #[test]
    fn midpoint_figures_interpolate_linearly() {
        // progress 0.475 rescales to p = 0.5.
        let r = approach_readout(&approach(200.0), IMPACT_PROGRESS / 2.0);
        assert_close(r.distance_km, 192_200.0, 1e-6);
        assert_close(r.diameter_m, 150.0, 1e-9);
        assert_close(r.velocity_kmh, 37_500.0, 1e-9);
    }

    #[test]
    fn overshoot_progress_is_clamped() {
        let r = approach_readout(&approach(200.0), 1.0);
        assert_close(r.diameter_m, 100.0, 1e-9);
        assert_close(r.distance_km, 0.0, 1e-9);
    }
}
