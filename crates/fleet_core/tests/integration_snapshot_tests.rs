mod support;

use fleet_core::ecs::Condition;
use fleet_core::runner::initialize_simulation;
use fleet_core::telemetry::FleetSnapshots;

use support::entities::VehicleBuilder;
use support::schedule::ScheduleRunner;
use support::world::TestWorldBuilder;

#[test]
fn every_processed_event_captures_a_snapshot() {
    let mut world = TestWorldBuilder::new()
        .with_seed(41)
        .with_end_time_ms(6_001)
        .build();
    VehicleBuilder::new(1).spawn(&mut world);
    VehicleBuilder::new(2).spawn(&mut world);

    initialize_simulation(&mut world);
    let mut runner = ScheduleRunner::new();
    let steps = runner.run_until_empty(&mut world, 100);
    assert_eq!(steps, 4);

    let history = world.resource::<FleetSnapshots>();
    assert_eq!(history.snapshots.len(), steps);
    assert_eq!(history.last_captured_at, Some(6_000));

    let times: Vec<u64> = history.snapshots.iter().map(|s| s.timestamp_ms).collect();
    assert_eq!(times, vec![0, 2_000, 4_000, 6_000]);
}

#[test]
fn the_first_snapshot_shows_the_unperturbed_fleet() {
    let mut world = TestWorldBuilder::new().with_seed(42).build();
    VehicleBuilder::new(1)
        .at(13.0827, 80.2707)
        .with_speed(60.0)
        .with_condition(Condition::Moderate)
        .spawn(&mut world);

    initialize_simulation(&mut world);
    let mut runner = ScheduleRunner::new();
    runner.run_one(&mut world);

    let history = world.resource::<FleetSnapshots>();
    let first = history.latest().expect("bootstrap snapshot");
    assert_eq!(first.timestamp_ms, 0);
    assert_eq!(first.vehicles[0].position.lat, 13.0827);
    assert_eq!(first.vehicles[0].speed_kmh, 60.0);
    assert_eq!(first.counts.moderate, 1);
}

#[test]
fn retention_cap_applies_across_a_run() {
    let mut world = TestWorldBuilder::new()
        .with_seed(43)
        .with_max_snapshots(3)
        .with_end_time_ms(20_001)
        .build();
    VehicleBuilder::new(1).spawn(&mut world);

    initialize_simulation(&mut world);
    let mut runner = ScheduleRunner::new();
    let steps = runner.run_until_empty(&mut world, 100);
    assert_eq!(steps, 11);

    let history = world.resource::<FleetSnapshots>();
    assert_eq!(history.snapshots.len(), 3);
    let times: Vec<u64> = history.snapshots.iter().map(|s| s.timestamp_ms).collect();
    assert_eq!(times, vec![16_000, 18_000, 20_000]);
}

#[test]
fn snapshot_counts_track_condition_changes() {
    let mut world = TestWorldBuilder::new()
        .with_seed(44)
        .with_end_time_ms(2_001)
        .build();
    for id in 1..=6u32 {
        VehicleBuilder::new(id).spawn(&mut world);
    }

    initialize_simulation(&mut world);
    let mut runner = ScheduleRunner::new();
    runner.run_until_empty(&mut world, 100);

    let history = world.resource::<FleetSnapshots>();
    for snapshot in &history.snapshots {
        assert_eq!(snapshot.counts.total(), 6);
        assert_eq!(snapshot.vehicles.len(), 6);
    }

    // After a tick the conditions are redrawn, so the tallies still match the
    // per-vehicle rows.
    let last = history.latest().expect("snapshot");
    let good = last
        .vehicles
        .iter()
        .filter(|v| v.condition == Condition::Good)
        .count();
    assert_eq!(last.counts.good, good);
}
