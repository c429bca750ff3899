//! Discrete event clock for the fleet simulation.
//!
//! Simulation time is a monotonically increasing `u64` in milliseconds.
//! Events live in a priority queue ordered by timestamp; popping an event
//! advances the clock to that timestamp, so no wall-clock time passes between
//! ticks unless a frontend chooses to pace them.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

/// Milliseconds per simulated second.
pub const ONE_SEC_MS: u64 = 1_000;

/// Everything that can happen to the fleet, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// Fired once at time zero to bootstrap the tick chain.
    SimulationStarted,
    /// One perturbation pass over every vehicle.
    Tick,
    /// Apply a staged relocation of the whole fleet.
    Recenter,
}

/// A scheduled occurrence of an [`EventKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub kind: EventKind,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by timestamp.
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event currently being processed. Inserted by the runner before each
/// schedule pass so systems can gate on the kind.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

/// Event queue plus the current simulation time.
#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: u64,
    epoch_ms: i64,
    events: BinaryHeap<Event>,
}

impl SimulationClock {
    /// Clock whose simulation time zero maps to `epoch_ms` on the wall clock.
    pub fn with_epoch(epoch_ms: i64) -> Self {
        Self {
            epoch_ms,
            ..Default::default()
        }
    }

    /// Current simulation time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Wall-clock milliseconds corresponding to simulation time zero.
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    pub fn set_epoch_ms(&mut self, epoch_ms: i64) {
        self.epoch_ms = epoch_ms;
    }

    /// Map a simulation timestamp to wall-clock milliseconds.
    pub fn sim_to_real_ms(&self, sim_ms: u64) -> i64 {
        self.epoch_ms + sim_ms as i64
    }

    /// Map wall-clock milliseconds back to simulation time. `None` for
    /// instants before the epoch.
    pub fn real_to_sim_ms(&self, real_ms: i64) -> Option<u64> {
        u64::try_from(real_ms - self.epoch_ms).ok()
    }

    /// Schedule `kind` at an absolute timestamp.
    pub fn schedule_at(&mut self, timestamp: u64, kind: EventKind) {
        debug_assert!(
            timestamp >= self.now,
            "cannot schedule event in the past: {} < {}",
            timestamp,
            self.now
        );
        self.events.push(Event { timestamp, kind });
    }

    /// Schedule `kind` at an absolute timestamp given in seconds.
    pub fn schedule_at_secs(&mut self, secs: u64, kind: EventKind) {
        self.schedule_at(secs * ONE_SEC_MS, kind);
    }

    /// Schedule `kind` a relative number of milliseconds from now.
    pub fn schedule_in(&mut self, delay_ms: u64, kind: EventKind) {
        self.schedule_at(self.now + delay_ms, kind);
    }

    /// Schedule `kind` a relative number of seconds from now.
    pub fn schedule_in_secs(&mut self, secs: u64, kind: EventKind) {
        self.schedule_in(secs * ONE_SEC_MS, kind);
    }

    /// Pop the next event and advance the clock to its timestamp.
    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    /// Timestamp of the next pending event without popping it.
    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|event| event.timestamp)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events still queued.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}
