//! Relocation: applies a staged [`PendingRecenter`] to the whole fleet.
//!
//! Every vehicle is scattered independently around the new origin; identity,
//! speed, heading, and condition all survive the move. Without a staged
//! request the event is a no-op, so a stray `Recenter` never disturbs the
//! fleet.

use bevy_ecs::prelude::{Commands, Query, Res, ResMut, With};

use crate::clock::{CurrentEvent, EventKind};
use crate::drift::DriftModel;
use crate::ecs::{GeoPosition, Vehicle};
use crate::scenario::{CityOrigin, PendingRecenter};

pub fn recenter_system(
    mut commands: Commands,
    event: Res<CurrentEvent>,
    pending: Option<Res<PendingRecenter>>,
    mut origin: ResMut<CityOrigin>,
    mut drift: ResMut<DriftModel>,
    mut vehicles: Query<&mut GeoPosition, With<Vehicle>>,
) {
    if event.0.kind != EventKind::Recenter {
        return;
    }
    let Some(pending) = pending else {
        return;
    };

    for mut position in vehicles.iter_mut() {
        let (dlat, dlon) = drift.sample_recenter_jitter();
        position.lat = pending.lat + dlat;
        position.lon = pending.lon + dlon;
    }

    origin.lat = pending.lat;
    origin.lon = pending.lon;
    origin.label = pending.label.clone();

    commands.remove_resource::<PendingRecenter>();
}
