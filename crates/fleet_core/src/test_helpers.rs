//! Shared fixtures for unit and integration tests.

use bevy_ecs::prelude::{Entity, World};

use crate::clock::SimulationClock;
use crate::drift::DriftModel;
use crate::ecs::{Condition, Direction, FleetRoster, GeoPosition, Speed, Vehicle};
use crate::proximity::ProximityConfig;
use crate::scenario::{CityOrigin, TickConfig};
use crate::telemetry::{FleetSnapshotConfig, FleetSnapshots, VehicleSnapshot};

/// Reference city origin used across tests (Chennai).
pub const TEST_CITY_LAT: f64 = 13.0827;
pub const TEST_CITY_LON: f64 = 80.2707;

/// World with every resource the simulation schedule needs, a seeded drift
/// model, and no vehicles.
pub fn create_test_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(SimulationClock::default());
    world.insert_resource(TickConfig::default());
    world.insert_resource(ProximityConfig::default());
    world.insert_resource(DriftModel::new(Some(seed)));
    world.insert_resource(FleetSnapshotConfig::default());
    world.insert_resource(FleetSnapshots::default());
    world.insert_resource(FleetRoster::default());
    world.insert_resource(CityOrigin {
        lat: TEST_CITY_LAT,
        lon: TEST_CITY_LON,
        label: None,
    });
    world
}

/// Spawns a vehicle with default condition/heading and registers it in the
/// roster.
pub fn spawn_test_vehicle(
    world: &mut World,
    id: u32,
    lat: f64,
    lon: f64,
    speed_kmh: f64,
) -> Entity {
    let entity = world
        .spawn((
            Vehicle { id },
            GeoPosition::new(lat, lon),
            Speed(speed_kmh),
            Condition::Good,
            Direction::North,
        ))
        .id();
    world.resource_mut::<FleetRoster>().0.push(entity);
    entity
}

/// Detached snapshot row for pure proximity tests.
pub fn vehicle_snapshot(id: u32, lat: f64, lon: f64, speed_kmh: f64) -> VehicleSnapshot {
    VehicleSnapshot {
        entity: Entity::from_raw(id),
        id,
        position: GeoPosition::new(lat, lon),
        speed_kmh,
        condition: Condition::Good,
        direction: Direction::North,
    }
}
