//! Captures a fleet snapshot after each state-changing event.

use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::SimulationClock;
use crate::ecs::{Condition, Direction, FleetRoster, GeoPosition, Speed, Vehicle};
use crate::telemetry::{
    FleetCounts, FleetSnapshot, FleetSnapshotConfig, FleetSnapshots, VehicleSnapshot,
};

pub fn capture_snapshot_system(
    clock: Res<SimulationClock>,
    config: Res<FleetSnapshotConfig>,
    roster: Res<FleetRoster>,
    mut snapshots: ResMut<FleetSnapshots>,
    vehicles: Query<(&Vehicle, &GeoPosition, &Speed, &Condition, &Direction)>,
) {
    let now = clock.now();

    let mut counts = FleetCounts::default();
    // Walk the roster so rows keep seed-list order.
    let mut rows = Vec::with_capacity(roster.0.len());
    for &entity in &roster.0 {
        let Ok((vehicle, position, speed, condition, direction)) = vehicles.get(entity) else {
            continue;
        };
        counts.add_vehicle(*condition);
        rows.push(VehicleSnapshot {
            entity,
            id: vehicle.id,
            position: *position,
            speed_kmh: speed.0,
            condition: *condition,
            direction: *direction,
        });
    }

    snapshots.last_captured_at = Some(now);
    snapshots.snapshots.push_back(FleetSnapshot {
        timestamp_ms: now,
        counts,
        vehicles: rows,
    });

    if snapshots.snapshots.len() > config.max_snapshots {
        snapshots.snapshots.pop_front();
    }
}
