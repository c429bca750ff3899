//! Tick perturbation: jitters every vehicle's position, random-walks its
//! speed, reshuffles heading and condition, then schedules the next tick.
//!
//! Each vehicle draws its offsets independently, so one vehicle's motion
//! never depends on another's. The tick chain is self-sustaining: processing
//! a tick always queues the next one at the configured interval.

use bevy_ecs::prelude::{Query, Res, ResMut, With};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::drift::DriftModel;
use crate::ecs::{Condition, Direction, GeoPosition, Speed, Vehicle};
use crate::scenario::TickConfig;

pub fn movement_system(
    event: Res<CurrentEvent>,
    mut clock: ResMut<SimulationClock>,
    tick: Res<TickConfig>,
    mut drift: ResMut<DriftModel>,
    mut vehicles: Query<
        (&mut GeoPosition, &mut Speed, &mut Direction, &mut Condition),
        With<Vehicle>,
    >,
) {
    if event.0.kind != EventKind::Tick {
        return;
    }

    for (mut position, mut speed, mut direction, mut condition) in vehicles.iter_mut() {
        let (dlat, dlon) = drift.sample_position_jitter();
        position.lat += dlat;
        position.lon += dlon;
        speed.0 = drift.sample_speed_kmh(speed.0);
        *direction = drift.sample_direction();
        *condition = drift.sample_condition();
    }

    clock.schedule_in(tick.interval_ms, EventKind::Tick);
}
