//! ECS components and resources for the vehicle fleet.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity, Resource};

/// Stable identity of one simulated vehicle. Ids are unique within a fleet
/// and survive every tick and recenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Component)]
pub struct Vehicle {
    pub id: u32,
}

/// Raw coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Component, serde::Serialize, serde::Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Current speed in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Speed(pub f64);

/// Mechanical condition reported by the vehicle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Component, serde::Serialize, serde::Deserialize,
)]
pub enum Condition {
    Good,
    Moderate,
    Critical,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Good, Condition::Moderate, Condition::Critical];
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::Good => "Good",
            Condition::Moderate => "Moderate",
            Condition::Critical => "Critical",
        };
        f.write_str(name)
    }
}

/// Eight-way compass heading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Component, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    North,
    South,
    East,
    West,
    #[serde(rename = "North-East")]
    NorthEast,
    #[serde(rename = "South-East")]
    SouthEast,
    #[serde(rename = "North-West")]
    NorthWest,
    #[serde(rename = "South-West")]
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::NorthEast => "North-East",
            Direction::SouthEast => "South-East",
            Direction::NorthWest => "North-West",
            Direction::SouthWest => "South-West",
        };
        f.write_str(name)
    }
}

/// Fleet entities in seed-list order. Bevy query iteration does not follow
/// insertion order, so snapshots and renderers walk this roster instead.
#[derive(Debug, Default, Resource)]
pub struct FleetRoster(pub Vec<Entity>);
