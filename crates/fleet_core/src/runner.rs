//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Each step pops the next event from [`SimulationClock`], exposes it as
//! [`CurrentEvent`], then runs the schedule. Systems gate themselves on the
//! event kind, so a single schedule serves every event.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::profiling::EventMetrics;
use crate::scenario::{PendingRecenter, SimulationEndTimeMs};
use crate::systems::movement::movement_system;
use crate::systems::recenter::recenter_system;
use crate::systems::snapshot::capture_snapshot_system;
use crate::systems::startup::simulation_started_system;

// Condition functions for each event kind.
fn is_simulation_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SimulationStarted)
        .unwrap_or(false)
}

fn is_tick(event: Option<Res<CurrentEvent>>) -> bool {
    event.map(|e| e.0.kind == EventKind::Tick).unwrap_or(false)
}

fn is_recenter(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::Recenter)
        .unwrap_or(false)
}

/// Condition: the fleet may have changed this step, so a snapshot is due.
fn should_capture_snapshot(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| {
            matches!(
                e.0.kind,
                EventKind::SimulationStarted | EventKind::Tick | EventKind::Recenter
            )
        })
        .unwrap_or(false)
}

/// Process the next scheduled event, if any. Returns `true` when an event was
/// processed, `false` when the queue is empty or the end time was reached.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    run_next_event_with_hook(world, schedule, |_, _| {})
}

/// Like [`run_next_event`], but invokes `hook` with the processed event after
/// the schedule pass. Frontends use this to observe progress.
pub fn run_next_event_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, &Event),
{
    let end_time_ms = world
        .get_resource::<SimulationEndTimeMs>()
        .map(|end| end.0);

    let event = {
        let mut clock = match world.get_resource_mut::<SimulationClock>() {
            Some(clock) => clock,
            None => return false,
        };
        if let (Some(end_ms), Some(next_ts)) = (end_time_ms, clock.next_event_time()) {
            if next_ts >= end_ms {
                return false;
            }
        }
        match clock.pop_next() {
            Some(event) => event,
            None => return false,
        }
    };

    world.insert_resource(CurrentEvent(event));
    if let Some(mut metrics) = world.get_resource_mut::<EventMetrics>() {
        metrics.record_event(event.kind);
    }
    schedule.run(world);
    hook(world, &event);
    true
}

/// Drain the event queue, stopping after `max_steps` events at the latest.
/// Returns the number of events processed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    run_until_empty_with_hook(world, schedule, max_steps, |_, _| {})
}

/// Like [`run_until_empty`] with a per-event hook.
pub fn run_until_empty_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
    mut hook: F,
) -> usize
where
    F: FnMut(&World, &Event),
{
    let mut steps = 0;
    while steps < max_steps {
        if !run_next_event_with_hook(world, schedule, &mut hook) {
            break;
        }
        steps += 1;
    }
    steps
}

/// Builds the default simulation schedule: one gated system per event kind,
/// then the snapshot capture.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    // Declaration order is load-bearing: capture must observe post-event
    // state, so the tuple is chained.
    schedule.add_systems(
        (
            simulation_started_system.run_if(is_simulation_started),
            movement_system.run_if(is_tick),
            recenter_system.run_if(is_recenter),
            capture_snapshot_system.run_if(should_capture_snapshot),
        )
            .chain(),
    );

    schedule
}

/// Schedules the `SimulationStarted` event at time zero. Call after
/// [`crate::scenario::build_scenario`] and before the first step.
pub fn initialize_simulation(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0, EventKind::SimulationStarted);
}

/// Stages a fleet relocation and schedules the `Recenter` event for the
/// current simulation time. The fleet only moves when that event is
/// processed.
pub fn request_recenter(world: &mut World, lat: f64, lon: f64, label: Option<String>) {
    world.insert_resource(PendingRecenter { lat, lon, label });
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_in(0, EventKind::Recenter);
}
