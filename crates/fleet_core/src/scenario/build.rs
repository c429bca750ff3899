//! Builds a ready-to-run world from [`ScenarioParams`].

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::SimulationClock;
use crate::drift::DriftModel;
use crate::ecs::{Condition, Direction, FleetRoster, GeoPosition, Speed, Vehicle};
use crate::proximity::ProximityConfig;
use crate::scenario::params::{
    CityOrigin, ScenarioParams, SeedFleetKind, SimulationEndTimeMs, TickConfig, VehicleSeed,
};
use crate::telemetry::{FleetSnapshotConfig, FleetSnapshots};

/// Scatter radius in degrees for uniformly generated fleets.
const UNIFORM_SCATTER_DEG: f64 = 0.02;
/// Speed range in km/h for uniformly generated fleets.
const UNIFORM_MIN_SPEED_KMH: f64 = 20.0;
const UNIFORM_MAX_SPEED_KMH: f64 = 80.0;

/// The ten-vehicle fleet of the reference deployment, centered on Chennai.
pub fn reference_fleet() -> Vec<VehicleSeed> {
    use Condition::*;
    use Direction::*;

    let rows = [
        (1, 60.0, Good, North, 13.0827, 80.2707),
        (2, 45.0, Moderate, East, 13.0837, 80.2717),
        (3, 70.0, Critical, South, 13.0817, 80.2697),
        (4, 50.0, Good, West, 13.0807, 80.2687),
        (5, 40.0, Moderate, NorthEast, 13.0847, 80.2727),
        (6, 80.0, Good, SouthEast, 13.0857, 80.2737),
        (7, 55.0, Critical, West, 13.0797, 80.2677),
        (8, 65.0, Good, NorthWest, 13.0867, 80.2747),
        (9, 30.0, Moderate, SouthWest, 13.0787, 80.2667),
        (10, 40.0, Critical, East, 13.0877, 80.2757),
    ];

    rows.into_iter()
        .map(|(id, speed_kmh, condition, direction, lat, lon)| VehicleSeed {
            id,
            lat,
            lon,
            speed_kmh,
            condition,
            direction,
        })
        .collect()
}

fn uniform_fleet(params: &ScenarioParams, count: usize) -> Vec<VehicleSeed> {
    // Fleet layout stays reproducible even when the drift RNG is unseeded.
    let seed = params.seed.unwrap_or(0).wrapping_add(0xf1ee_7bed);
    let mut rng = StdRng::seed_from_u64(seed);

    (1..=count)
        .map(|id| VehicleSeed {
            id: id as u32,
            lat: params.city_lat + rng.gen_range(-UNIFORM_SCATTER_DEG..=UNIFORM_SCATTER_DEG),
            lon: params.city_lon + rng.gen_range(-UNIFORM_SCATTER_DEG..=UNIFORM_SCATTER_DEG),
            speed_kmh: rng.gen_range(UNIFORM_MIN_SPEED_KMH..=UNIFORM_MAX_SPEED_KMH),
            condition: Condition::ALL[rng.gen_range(0..Condition::ALL.len())],
            direction: Direction::ALL[rng.gen_range(0..Direction::ALL.len())],
        })
        .collect()
}

/// Inserts every simulation resource and spawns the seed fleet. The world is
/// runnable once [`crate::runner::initialize_simulation`] has scheduled the
/// start event.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    let mut clock = SimulationClock::default();
    if let Some(epoch_ms) = params.epoch_ms {
        clock.set_epoch_ms(epoch_ms);
    }
    world.insert_resource(clock);

    world.insert_resource(TickConfig {
        interval_ms: params.tick_interval_ms,
    });
    world.insert_resource(
        ProximityConfig::default()
            .with_communication_range_deg(params.communication_range_deg)
            .with_accident_range_deg(params.accident_range_deg),
    );

    let snapshot_config = match params.max_snapshots {
        Some(max_snapshots) => FleetSnapshotConfig { max_snapshots },
        None => FleetSnapshotConfig::default(),
    };
    world.insert_resource(snapshot_config);
    world.insert_resource(FleetSnapshots::default());

    if let Some(end_time_ms) = params.simulation_end_time_ms {
        world.insert_resource(SimulationEndTimeMs(end_time_ms));
    }

    world.insert_resource(DriftModel::new(params.seed.map(|seed| seed ^ 0x5eed_cafe)));

    world.insert_resource(CityOrigin {
        lat: params.city_lat,
        lon: params.city_lon,
        label: None,
    });

    let seeds = match &params.fleet {
        SeedFleetKind::Reference => reference_fleet(),
        SeedFleetKind::Uniform { count } => uniform_fleet(&params, *count),
        SeedFleetKind::Custom(seeds) => seeds.clone(),
    };
    debug_assert!(
        {
            let mut ids: Vec<u32> = seeds.iter().map(|seed| seed.id).collect();
            ids.sort_unstable();
            ids.windows(2).all(|pair| pair[0] != pair[1])
        },
        "vehicle ids must be unique"
    );

    let mut roster = FleetRoster::default();
    for seed in &seeds {
        let entity = world
            .spawn((
                Vehicle { id: seed.id },
                GeoPosition::new(seed.lat, seed.lon),
                Speed(seed.speed_kmh),
                seed.condition,
                seed.direction,
            ))
            .id();
        roster.0.push(entity);
    }
    world.insert_resource(roster);
}
