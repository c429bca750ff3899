#![allow(dead_code)]

use bevy_ecs::prelude::{Entity, World};
use fleet_core::ecs::{Condition, Direction, FleetRoster, GeoPosition, Speed, Vehicle};

/// Builder for vehicle fixtures. Spawned vehicles are registered in the
/// roster so snapshots pick them up in creation order.
#[derive(Clone, Debug)]
pub struct VehicleBuilder {
    id: u32,
    lat: f64,
    lon: f64,
    speed_kmh: f64,
    condition: Condition,
    direction: Direction,
}

impl Default for VehicleBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            lat: 13.0827,
            lon: 80.2707,
            speed_kmh: 45.0,
            condition: Condition::Good,
            direction: Direction::North,
        }
    }
}

impl VehicleBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn spawn(self, world: &mut World) -> Entity {
        let entity = world
            .spawn((
                Vehicle { id: self.id },
                GeoPosition::new(self.lat, self.lon),
                Speed(self.speed_kmh),
                self.condition,
                self.direction,
            ))
            .id();
        world.resource_mut::<FleetRoster>().0.push(entity);
        entity
    }
}
