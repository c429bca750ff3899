//! Event rate tracking for simulation runs.

use std::collections::HashMap;
use std::time::Instant;

use bevy_ecs::prelude::Resource;

use crate::clock::EventKind;

/// Event processing rate metrics. Optional: the runner records into this
/// resource only when a frontend has inserted it.
#[derive(Debug, Default, Resource)]
pub struct EventMetrics {
    /// Total events processed.
    pub events_processed: u64,
    /// Start time for rate calculation.
    pub start_time: Option<Instant>,
    /// Events per event kind.
    pub events_by_kind: HashMap<EventKind, u64>,
}

impl EventMetrics {
    /// Record an event being processed.
    pub fn record_event(&mut self, kind: EventKind) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
        self.events_processed += 1;
        *self.events_by_kind.entry(kind).or_insert(0) += 1;
    }

    /// Current event processing rate (events per second).
    pub fn events_per_second(&self) -> f64 {
        match self.start_time {
            Some(start) => {
                let elapsed = start.elapsed().as_secs_f64();
                if elapsed > 0.0 {
                    self.events_processed as f64 / elapsed
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }

    /// Print summary statistics to stderr.
    pub fn print_summary(&self) {
        eprintln!("\n=== Event Metrics ===");
        eprintln!("Events processed: {}", self.events_processed);
        eprintln!("Events per second: {:.0}", self.events_per_second());
        let mut kinds: Vec<_> = self.events_by_kind.iter().collect();
        kinds.sort_by_key(|(kind, _)| **kind);
        for (kind, count) in kinds {
            eprintln!("  {:?}: {}", kind, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_event_tallies_by_kind() {
        let mut metrics = EventMetrics::default();
        metrics.record_event(EventKind::SimulationStarted);
        metrics.record_event(EventKind::Tick);
        metrics.record_event(EventKind::Tick);

        assert_eq!(metrics.events_processed, 3);
        assert_eq!(metrics.events_by_kind.get(&EventKind::Tick), Some(&2));
        assert!(metrics.start_time.is_some());
    }
}
