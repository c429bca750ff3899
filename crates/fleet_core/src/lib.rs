pub mod clock;
pub mod drift;
pub mod ecs;
pub mod profiling;
pub mod proximity;
pub mod runner;
pub mod scenario;
pub mod spatial;
pub mod systems;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
