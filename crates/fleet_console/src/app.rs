//! Owns the simulation world and schedule for one console session.

use std::fs::File;
use std::path::Path;

use bevy_ecs::prelude::{Schedule, World};

use fleet_core::clock::{EventKind, SimulationClock};
use fleet_core::profiling::EventMetrics;
use fleet_core::proximity::ProximityConfig;
use fleet_core::runner::{
    initialize_simulation, request_recenter, run_next_event, run_next_event_with_hook,
    simulation_schedule,
};
use fleet_core::scenario::{
    build_scenario, CityOrigin, ScenarioParams, TickConfig, VehicleSeed,
    DEFAULT_TICK_INTERVAL_MS,
};
use fleet_core::telemetry::{FleetSnapshot, FleetSnapshots};

#[cfg(feature = "geocode")]
use crate::geocode::{GeocodeClient, GeocodeError};

/// Console-facing wrapper around the ECS world.
pub struct ConsoleApp {
    pub world: World,
    pub schedule: Schedule,
    pub steps_executed: usize,
}

impl ConsoleApp {
    /// Build a scenario and schedule its start event.
    pub fn new(params: ScenarioParams) -> Self {
        let mut world = World::new();
        build_scenario(&mut world, params);
        world.insert_resource(EventMetrics::default());
        initialize_simulation(&mut world);
        Self {
            world,
            schedule: simulation_schedule(),
            steps_executed: 0,
        }
    }

    /// Stage a relocation. It takes effect on the next processed event.
    pub fn recenter(&mut self, lat: f64, lon: f64, label: Option<String>) {
        request_recenter(&mut self.world, lat, lon, label);
    }

    /// Process every event already due at the current simulation time.
    /// Returns the number of events processed.
    pub fn process_due_events(&mut self) -> usize {
        let mut processed = 0;
        loop {
            let due = self
                .world
                .get_resource::<SimulationClock>()
                .and_then(|clock| clock.next_event_time().map(|ts| ts <= clock.now()))
                .unwrap_or(false);
            if !due {
                break;
            }
            if !run_next_event(&mut self.world, &mut self.schedule) {
                break;
            }
            self.steps_executed += 1;
            processed += 1;
        }
        processed
    }

    /// Advance until one tick has been processed. Returns `false` when the
    /// queue is exhausted or the end time has been reached.
    pub fn step_tick(&mut self) -> bool {
        loop {
            let mut saw_tick = false;
            let advanced =
                run_next_event_with_hook(&mut self.world, &mut self.schedule, |_, event| {
                    if event.kind == EventKind::Tick {
                        saw_tick = true;
                    }
                });
            if !advanced {
                return false;
            }
            self.steps_executed += 1;
            if saw_tick {
                return true;
            }
        }
    }

    /// Run up to `ticks` perturbation passes, returning how many completed.
    pub fn run_ticks(&mut self, ticks: u64) -> u64 {
        let mut completed = 0;
        while completed < ticks && self.step_tick() {
            completed += 1;
        }
        completed
    }

    pub fn latest_snapshot(&self) -> Option<FleetSnapshot> {
        self.world
            .get_resource::<FleetSnapshots>()
            .and_then(|snapshots| snapshots.latest().cloned())
    }

    pub fn snapshot_history(&self) -> Option<&FleetSnapshots> {
        self.world.get_resource::<FleetSnapshots>()
    }

    pub fn city_origin(&self) -> Option<CityOrigin> {
        self.world.get_resource::<CityOrigin>().cloned()
    }

    pub fn proximity_config(&self) -> ProximityConfig {
        self.world
            .get_resource::<ProximityConfig>()
            .copied()
            .unwrap_or_default()
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.world
            .get_resource::<TickConfig>()
            .map(|tick| tick.interval_ms)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
    }

    pub fn event_metrics(&self) -> Option<&EventMetrics> {
        self.world.get_resource::<EventMetrics>()
    }
}

/// Outcome of a place-name search, mapped to user-facing messages by the CLI.
#[cfg(feature = "geocode")]
#[derive(Debug)]
pub enum SearchOutcome {
    Recentered { label: String },
    EmptyQuery,
    NotFound,
    Failed(String),
}

#[cfg(feature = "geocode")]
impl ConsoleApp {
    /// Geocode a free-text place name and recenter the fleet on the first
    /// match. Failures leave the fleet untouched.
    pub fn search_city(&mut self, client: &GeocodeClient, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::EmptyQuery;
        }
        match client.search(query) {
            Ok(place) => {
                let label = place.display_name.clone();
                self.recenter(place.lat, place.lon, Some(place.display_name));
                SearchOutcome::Recentered { label }
            }
            Err(GeocodeError::NoResult) => SearchOutcome::NotFound,
            Err(err) => SearchOutcome::Failed(format!("{err:?}")),
        }
    }
}

/// Read a seed fleet from a JSON file: an array of vehicle seed objects.
pub fn load_fleet_file(path: &Path) -> Result<Vec<VehicleSeed>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let seeds: Vec<VehicleSeed> = serde_json::from_reader(file)?;
    Ok(seeds)
}
