//! Bootstrap: reacts to `SimulationStarted` by scheduling the first tick.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::scenario::TickConfig;

pub fn simulation_started_system(
    event: Res<CurrentEvent>,
    mut clock: ResMut<SimulationClock>,
    tick: Res<TickConfig>,
) {
    if event.0.kind != EventKind::SimulationStarted {
        return;
    }

    clock.schedule_in(tick.interval_ms, EventKind::Tick);
}
