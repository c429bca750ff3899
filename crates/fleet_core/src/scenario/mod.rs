//! Scenario setup: parameters, seed fleets, and world construction.

mod build;
mod params;

pub use build::{build_scenario, reference_fleet};
pub use params::{
    CityOrigin, PendingRecenter, ScenarioParams, SeedFleetKind, SimulationEndTimeMs, TickConfig,
    VehicleSeed, DEFAULT_CITY_LAT, DEFAULT_CITY_LON, DEFAULT_TICK_INTERVAL_MS,
};
