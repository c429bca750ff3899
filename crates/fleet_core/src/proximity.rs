//! Proximity queries over fleet snapshots: nearby vehicles, congestion, and
//! accident risk.
//!
//! All queries are pure functions over snapshot slices. They never touch the
//! ECS world, so renderers can re-run them on a captured snapshot as often as
//! they redraw. Results preserve the order of the input slice, which is the
//! roster (seed-list) order for snapshots produced by the simulation.

use bevy_ecs::prelude::Resource;

use crate::spatial::within_box_deg;
use crate::telemetry::VehicleSnapshot;

/// Default communication range in degrees: vehicles inside this box are
/// "nearby".
pub const COMMUNICATION_RANGE_DEG: f64 = 0.02;
/// Default accident range in degrees, the tighter box for collision checks.
pub const ACCIDENT_RANGE_DEG: f64 = 0.005;
/// Both vehicles must be strictly faster than this for an accident flag.
pub const ACCIDENT_SPEED_KMH: f64 = 50.0;
/// Nearby count at which a vehicle is considered to sit in congestion.
pub const CONGESTION_THRESHOLD: usize = 5;

/// Range thresholds for proximity queries.
#[derive(Debug, Clone, Copy, Resource)]
pub struct ProximityConfig {
    pub communication_range_deg: f64,
    pub accident_range_deg: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            communication_range_deg: COMMUNICATION_RANGE_DEG,
            accident_range_deg: ACCIDENT_RANGE_DEG,
        }
    }
}

impl ProximityConfig {
    pub fn with_communication_range_deg(mut self, range_deg: f64) -> Self {
        self.communication_range_deg = range_deg;
        self
    }

    pub fn with_accident_range_deg(mut self, range_deg: f64) -> Self {
        self.accident_range_deg = range_deg;
        self
    }
}

/// Outcome of an accident-risk assessment for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccidentRisk {
    Clear,
    /// Ids of the vehicles this one is at risk with, in fleet order.
    Risk(Vec<u32>),
}

/// Congestion classification around one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CongestionLevel {
    Clear,
    Congested,
}

/// Every other vehicle within the communication box of `vehicle`, in fleet
/// order. Identity is compared by id, so a vehicle is never its own neighbor
/// even when the snapshot contains it.
pub fn find_nearby<'a>(
    vehicle: &VehicleSnapshot,
    fleet: &'a [VehicleSnapshot],
    config: &ProximityConfig,
) -> Vec<&'a VehicleSnapshot> {
    fleet
        .iter()
        .filter(|other| other.id != vehicle.id)
        .filter(|other| {
            within_box_deg(
                vehicle.position,
                other.position,
                config.communication_range_deg,
            )
        })
        .collect()
}

/// Flags vehicles inside the accident box when both parties are strictly
/// faster than [`ACCIDENT_SPEED_KMH`].
///
/// Candidates normally come from the `nearby` set. When the accident range is
/// configured wider than the communication range that set cannot contain every
/// candidate, so the whole fleet is rescanned instead of under-reporting.
pub fn assess_accident_risk(
    vehicle: &VehicleSnapshot,
    nearby: &[&VehicleSnapshot],
    fleet: &[VehicleSnapshot],
    config: &ProximityConfig,
) -> AccidentRisk {
    let at_risk = |other: &VehicleSnapshot| {
        other.id != vehicle.id
            && within_box_deg(vehicle.position, other.position, config.accident_range_deg)
            && vehicle.speed_kmh > ACCIDENT_SPEED_KMH
            && other.speed_kmh > ACCIDENT_SPEED_KMH
    };

    let mut ids = Vec::new();
    if config.accident_range_deg > config.communication_range_deg {
        for other in fleet {
            if at_risk(other) {
                ids.push(other.id);
            }
        }
    } else {
        for &other in nearby {
            if at_risk(other) {
                ids.push(other.id);
            }
        }
    }

    if ids.is_empty() {
        AccidentRisk::Clear
    } else {
        AccidentRisk::Risk(ids)
    }
}

/// Congested when at least [`CONGESTION_THRESHOLD`] vehicles are nearby.
pub fn congestion_level(nearby_count: usize) -> CongestionLevel {
    if nearby_count >= CONGESTION_THRESHOLD {
        CongestionLevel::Congested
    } else {
        CongestionLevel::Clear
    }
}
