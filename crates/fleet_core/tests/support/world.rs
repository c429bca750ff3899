#![allow(dead_code)]

use bevy_ecs::prelude::World;
use fleet_core::clock::SimulationClock;
use fleet_core::drift::DriftModel;
use fleet_core::ecs::FleetRoster;
use fleet_core::proximity::ProximityConfig;
use fleet_core::scenario::{CityOrigin, SimulationEndTimeMs, TickConfig};
use fleet_core::telemetry::{FleetSnapshotConfig, FleetSnapshots};

/// Builder for integration-test worlds with every simulation resource
/// present and a seeded drift model.
pub struct TestWorldBuilder {
    seed: u64,
    tick_interval_ms: u64,
    communication_range_deg: f64,
    accident_range_deg: f64,
    max_snapshots: usize,
    end_time_ms: Option<u64>,
}

impl Default for TestWorldBuilder {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_interval_ms: 2_000,
            communication_range_deg: 0.02,
            accident_range_deg: 0.005,
            max_snapshots: 10_000,
            end_time_ms: None,
        }
    }
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tick_interval_ms(mut self, interval_ms: u64) -> Self {
        self.tick_interval_ms = interval_ms;
        self
    }

    pub fn with_ranges(mut self, communication_range_deg: f64, accident_range_deg: f64) -> Self {
        self.communication_range_deg = communication_range_deg;
        self.accident_range_deg = accident_range_deg;
        self
    }

    pub fn with_max_snapshots(mut self, max_snapshots: usize) -> Self {
        self.max_snapshots = max_snapshots;
        self
    }

    pub fn with_end_time_ms(mut self, end_time_ms: u64) -> Self {
        self.end_time_ms = Some(end_time_ms);
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(TickConfig {
            interval_ms: self.tick_interval_ms,
        });
        world.insert_resource(
            ProximityConfig::default()
                .with_communication_range_deg(self.communication_range_deg)
                .with_accident_range_deg(self.accident_range_deg),
        );
        world.insert_resource(DriftModel::new(Some(self.seed)));
        world.insert_resource(FleetSnapshotConfig {
            max_snapshots: self.max_snapshots,
        });
        world.insert_resource(FleetSnapshots::default());
        world.insert_resource(FleetRoster::default());
        world.insert_resource(CityOrigin {
            lat: 13.0827,
            lon: 80.2707,
            label: None,
        });
        if let Some(end_time_ms) = self.end_time_ms {
            world.insert_resource(SimulationEndTimeMs(end_time_ms));
        }
        world
    }
}
