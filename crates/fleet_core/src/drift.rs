//! Stochastic drift model: every random draw the simulation makes goes
//! through this resource, so a seeded run replays exactly.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ecs::{Condition, Direction};

/// Per-tick position jitter bound in degrees, applied per axis.
pub const POSITION_JITTER_DEG: f64 = 0.005;
/// Per-tick speed delta bound in km/h.
pub const SPEED_DELTA_KMH: f64 = 5.0;
/// Floor applied to speed after every delta.
pub const MIN_SPEED_KMH: f64 = 20.0;
/// Per-vehicle scatter around a new origin when the fleet is recentered.
pub const RECENTER_JITTER_DEG: f64 = 0.01;

#[derive(Resource)]
pub struct DriftModel {
    rng: StdRng,
    position_jitter_deg: f64,
    speed_delta_kmh: f64,
    min_speed_kmh: f64,
    recenter_jitter_deg: f64,
}

impl DriftModel {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_limits(
            seed,
            POSITION_JITTER_DEG,
            SPEED_DELTA_KMH,
            MIN_SPEED_KMH,
            RECENTER_JITTER_DEG,
        )
    }

    pub fn with_limits(
        seed: Option<u64>,
        position_jitter_deg: f64,
        speed_delta_kmh: f64,
        min_speed_kmh: f64,
        recenter_jitter_deg: f64,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            position_jitter_deg,
            speed_delta_kmh,
            min_speed_kmh,
            recenter_jitter_deg,
        }
    }

    pub fn min_speed_kmh(&self) -> f64 {
        self.min_speed_kmh
    }

    /// Independent lat/lon offsets for one tick.
    pub fn sample_position_jitter(&mut self) -> (f64, f64) {
        let bound = self.position_jitter_deg;
        (
            self.rng.gen_range(-bound..=bound),
            self.rng.gen_range(-bound..=bound),
        )
    }

    /// New speed after one random-walk step, clamped to the floor.
    pub fn sample_speed_kmh(&mut self, current_kmh: f64) -> f64 {
        let delta = self
            .rng
            .gen_range(-self.speed_delta_kmh..=self.speed_delta_kmh);
        (current_kmh + delta).max(self.min_speed_kmh)
    }

    pub fn sample_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }

    pub fn sample_condition(&mut self) -> Condition {
        Condition::ALL[self.rng.gen_range(0..Condition::ALL.len())]
    }

    /// Independent lat/lon scatter around a recenter origin.
    pub fn sample_recenter_jitter(&mut self) -> (f64, f64) {
        let bound = self.recenter_jitter_deg;
        (
            self.rng.gen_range(-bound..=bound),
            self.rng.gen_range(-bound..=bound),
        )
    }
}
