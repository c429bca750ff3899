//! Scenario parameters and the config resources built from them.

use bevy_ecs::prelude::Resource;

use crate::ecs::{Condition, Direction};
use crate::proximity::{ACCIDENT_RANGE_DEG, COMMUNICATION_RANGE_DEG};

/// Default city origin: Chennai, India (the reference deployment).
pub const DEFAULT_CITY_LAT: f64 = 13.0827;
pub const DEFAULT_CITY_LON: f64 = 80.2707;

/// Default perturbation cadence in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;

/// Perturbation cadence. The movement system schedules the next tick this
/// many milliseconds after the one it is processing.
#[derive(Debug, Clone, Copy, Resource)]
pub struct TickConfig {
    pub interval_ms: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Simulation end time in milliseconds. When present, the runner refuses to
/// process events at or past this timestamp.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationEndTimeMs(pub u64);

/// Where the fleet is currently centered. Recentering updates this; frontends
/// show the label when one is known.
#[derive(Debug, Clone, Resource)]
pub struct CityOrigin {
    pub lat: f64,
    pub lon: f64,
    pub label: Option<String>,
}

/// A staged relocation, consumed by the recenter system on the next
/// `Recenter` event. Until then the fleet is untouched.
#[derive(Debug, Clone, Resource)]
pub struct PendingRecenter {
    pub lat: f64,
    pub lon: f64,
    pub label: Option<String>,
}

/// Initial state for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VehicleSeed {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub speed_kmh: f64,
    pub condition: Condition,
    pub direction: Direction,
}

/// How the initial fleet is produced.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SeedFleetKind {
    /// The ten-vehicle reference fleet around the default city origin.
    #[default]
    Reference,
    /// `count` vehicles scattered uniformly around the city origin.
    Uniform { count: usize },
    /// An explicit seed list. May be empty.
    Custom(Vec<VehicleSeed>),
}

/// Parameters for building a simulation scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub fleet: SeedFleetKind,
    pub city_lat: f64,
    pub city_lon: f64,
    pub tick_interval_ms: u64,
    pub communication_range_deg: f64,
    pub accident_range_deg: f64,
    /// RNG seed. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Wall-clock milliseconds mapped to simulation time zero.
    pub epoch_ms: Option<i64>,
    /// Optional end of simulated time in ms.
    pub simulation_end_time_ms: Option<u64>,
    /// Snapshot retention override.
    pub max_snapshots: Option<usize>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            fleet: SeedFleetKind::default(),
            city_lat: DEFAULT_CITY_LAT,
            city_lon: DEFAULT_CITY_LON,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            communication_range_deg: COMMUNICATION_RANGE_DEG,
            accident_range_deg: ACCIDENT_RANGE_DEG,
            seed: None,
            epoch_ms: None,
            simulation_end_time_ms: None,
            max_snapshots: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fleet(mut self, fleet: SeedFleetKind) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn with_uniform_fleet(mut self, count: usize) -> Self {
        self.fleet = SeedFleetKind::Uniform { count };
        self
    }

    pub fn with_city_origin(mut self, lat: f64, lon: f64) -> Self {
        self.city_lat = lat;
        self.city_lon = lon;
        self
    }

    pub fn with_tick_interval_ms(mut self, interval_ms: u64) -> Self {
        self.tick_interval_ms = interval_ms;
        self
    }

    pub fn with_communication_range_deg(mut self, range_deg: f64) -> Self {
        self.communication_range_deg = range_deg;
        self
    }

    pub fn with_accident_range_deg(mut self, range_deg: f64) -> Self {
        self.accident_range_deg = range_deg;
        self
    }

    pub fn with_epoch_ms(mut self, epoch_ms: i64) -> Self {
        self.epoch_ms = Some(epoch_ms);
        self
    }

    pub fn with_simulation_end_time_ms(mut self, end_time_ms: u64) -> Self {
        self.simulation_end_time_ms = Some(end_time_ms);
        self
    }

    /// End the run after `ticks` perturbation passes. The end time lands just
    /// past the final tick so that tick is still processed.
    pub fn with_tick_budget(mut self, ticks: u64) -> Self {
        self.simulation_end_time_ms = Some(ticks * self.tick_interval_ms + 1);
        self
    }

    pub fn with_max_snapshots(mut self, max_snapshots: usize) -> Self {
        self.max_snapshots = Some(max_snapshots);
        self
    }
}
