//! Fleet snapshots: the read surface frontends consume.
//!
//! The simulation captures a snapshot after every state-changing event.
//! Renderers, exporters, and the proximity queries all work on snapshots
//! rather than on live ECS state.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource};

use crate::ecs::{Condition, Direction, GeoPosition};

/// One vehicle's state at capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    pub entity: Entity,
    pub id: u32,
    pub position: GeoPosition,
    pub speed_kmh: f64,
    pub condition: Condition,
    pub direction: Direction,
}

/// Condition tallies across the fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetCounts {
    pub good: usize,
    pub moderate: usize,
    pub critical: usize,
}

impl FleetCounts {
    pub fn add_vehicle(&mut self, condition: Condition) {
        match condition {
            Condition::Good => self.good += 1,
            Condition::Moderate => self.moderate += 1,
            Condition::Critical => self.critical += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.good + self.moderate + self.critical
    }
}

/// The whole fleet at one simulation timestamp, vehicles in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSnapshot {
    pub timestamp_ms: u64,
    pub counts: FleetCounts,
    pub vehicles: Vec<VehicleSnapshot>,
}

/// Snapshot retention configuration.
#[derive(Debug, Clone, Copy, Resource)]
pub struct FleetSnapshotConfig {
    /// Oldest snapshots are evicted beyond this count.
    pub max_snapshots: usize,
}

impl Default for FleetSnapshotConfig {
    fn default() -> Self {
        Self {
            max_snapshots: 10_000,
        }
    }
}

/// Rolling snapshot buffer.
#[derive(Debug, Default, Resource)]
pub struct FleetSnapshots {
    pub snapshots: VecDeque<FleetSnapshot>,
    pub last_captured_at: Option<u64>,
}

impl FleetSnapshots {
    /// Most recent snapshot, if any has been captured yet.
    pub fn latest(&self) -> Option<&FleetSnapshot> {
        self.snapshots.back()
    }
}
