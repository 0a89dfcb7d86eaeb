use foundation::math::{GeoCoordinate, Vec3};
use runtime::{EventBus, Frame};

/// Fixed spawn point of a falling meteor, well outside the globe.
pub const METEOR_START: Vec3 = Vec3::new(5.0, 3.0, 4.0);

/// Fall progress gained per second; a full dive takes ~6.3 s.
pub const FALL_RATE: f64 = 0.15;

/// Progress at which the body is considered to have arrived.
pub const IMPACT_PROGRESS: f64 = 0.95;

/// Idle time after an impact before the next launch is accepted.
pub const COOLDOWN_S: f64 = 2.0;

/// Meteor render scale shrinks from entry to arrival.
pub const START_SCALE: f64 = 1.5;
pub const END_SCALE: f64 = 0.3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlightPhase {
    Idle,
    Falling,
    Impacted,
    CoolingDown,
}

/// Where an armed flight is headed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LaunchTarget {
    pub point: Vec3,
    pub geo: GeoCoordinate,
}

/// What one tick produced, for the driver to render or act on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    Idle,
    Falling {
        progress: f64,
        position: Vec3,
        scale: f64,
    },
    /// Reported exactly once per flight, on the frame the body arrives.
    Impact {
        geo: GeoCoordinate,
        diameter_m: f64,
    },
    CoolingDown {
        remaining_s: f64,
    },
    /// Cooldown elapsed: launching is enabled again and the roster has
    /// advanced to `next_approach`.
    Reset {
        next_approach: usize,
    },
}

/// The meteor flight state machine.
///
/// All interaction state that used to live in scattered globals (current
/// target, roster index, launch-enabled flag) is owned here and advanced
/// only by [`FlightSim::tick`]. Launch debounce falls out of the phases:
/// `arm` is accepted in `Idle` only, and the machine does not return to
/// `Idle` until the post-impact cooldown has elapsed.
#[derive(Debug)]
pub struct FlightSim {
    phase: FlightPhase,
    elapsed_s: f64,
    target: Option<LaunchTarget>,
    diameter_m: f64,
    approach_index: usize,
    approach_count: usize,
}

impl FlightSim {
    /// `approach_count` is the roster size; zero disables launching.
    pub fn new(approach_count: usize) -> Self {
        Self {
            phase: FlightPhase::Idle,
            elapsed_s: 0.0,
            target: None,
            diameter_m: 0.0,
            approach_index: 0,
            approach_count,
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Index into the approach roster the next launch will use.
    pub fn approach_index(&self) -> usize {
        self.approach_index
    }

    pub fn can_launch(&self) -> bool {
        self.phase == FlightPhase::Idle && self.approach_count > 0
    }

    /// Arms a flight toward `target`. Rejected (returns `false`) while a
    /// flight is in progress or the roster is empty.
    pub fn arm(
        &mut self,
        frame: Frame,
        bus: &mut EventBus,
        target: LaunchTarget,
        diameter_m: f64,
    ) -> bool {
        if !self.can_launch() {
            return false;
        }
        self.phase = FlightPhase::Falling;
        self.elapsed_s = 0.0;
        self.target = Some(target);
        self.diameter_m = diameter_m;
        bus.emit(
            frame,
            "launch",
            format!(
                "approach={} lat={:.1} lon={:.1}",
                self.approach_index, target.geo.lat_deg, target.geo.lon_deg
            ),
        );
        true
    }

    /// Advances the machine by one frame.
    pub fn tick(&mut self, frame: Frame, bus: &mut EventBus) -> TickOutcome {
        match self.phase {
            FlightPhase::Idle => TickOutcome::Idle,
            FlightPhase::Falling => {
                let Some(target) = self.target else {
                    // Unarmed falling state is unreachable through `arm`;
                    // recover rather than panic.
                    self.phase = FlightPhase::Idle;
                    return TickOutcome::Idle;
                };

                self.elapsed_s += frame.dt_s;
                let progress = (self.elapsed_s * FALL_RATE).min(1.0);
                if progress >= IMPACT_PROGRESS {
                    self.phase = FlightPhase::Impacted;
                    self.elapsed_s = 0.0;
                    bus.emit(
                        frame,
                        "impact",
                        format!(
                            "lat={:.1} lon={:.1} diameter_m={:.1}",
                            target.geo.lat_deg, target.geo.lon_deg, self.diameter_m
                        ),
                    );
                    return TickOutcome::Impact {
                        geo: target.geo,
                        diameter_m: self.diameter_m,
                    };
                }

                TickOutcome::Falling {
                    progress,
                    position: METEOR_START.lerp(target.point, progress),
                    scale: START_SCALE - (START_SCALE - END_SCALE) * progress,
                }
            }
            FlightPhase::Impacted => {
                self.phase = FlightPhase::CoolingDown;
                self.elapsed_s = 0.0;
                TickOutcome::CoolingDown {
                    remaining_s: COOLDOWN_S,
                }
            }
            FlightPhase::CoolingDown => {
                self.elapsed_s += frame.dt_s;
                if self.elapsed_s <= COOLDOWN_S {
                    return TickOutcome::CoolingDown {
                        remaining_s: COOLDOWN_S - self.elapsed_s,
                    };
                }

                self.phase = FlightPhase::Idle;
                self.elapsed_s = 0.0;
                self.target = None;
                if self.approach_count > 0 {
                    self.approach_index = (self.approach_index + 1) % self.approach_count;
                }
                bus.emit(
                    frame,
                    "reset",
                    format!("next_approach={}", self.approach_index),
                );
                TickOutcome::Reset {
                    next_approach: self.approach_index,
                }
            }
        }
    }
}
