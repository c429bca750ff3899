//! Snapshot exports: CSV history and latest-snapshot JSON.

use std::fs::File;
use std::path::Path;

use fleet_core::telemetry::{FleetSnapshot, FleetSnapshots};
use serde_json::json;

/// Write the whole snapshot history as CSV, one row per vehicle per
/// snapshot.
pub fn export_history_csv(
    snapshots: &FleetSnapshots,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "timestamp_ms",
        "vehicle_id",
        "lat",
        "lon",
        "speed_kmh",
        "condition",
        "direction",
    ])?;

    for snapshot in &snapshots.snapshots {
        for vehicle in &snapshot.vehicles {
            wtr.write_record([
                snapshot.timestamp_ms.to_string(),
                vehicle.id.to_string(),
                vehicle.position.lat.to_string(),
                vehicle.position.lon.to_string(),
                vehicle.speed_kmh.to_string(),
                vehicle.condition.to_string(),
                vehicle.direction.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write one snapshot as pretty-printed JSON.
pub fn export_snapshot_json(
    snapshot: &FleetSnapshot,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let vehicles: Vec<_> = snapshot
        .vehicles
        .iter()
        .map(|vehicle| {
            json!({
                "id": vehicle.id,
                "lat": vehicle.position.lat,
                "lon": vehicle.position.lon,
                "speed_kmh": vehicle.speed_kmh,
                "condition": vehicle.condition.to_string(),
                "direction": vehicle.direction.to_string(),
            })
        })
        .collect();

    let payload = json!({
        "timestamp_ms": snapshot.timestamp_ms,
        "counts": {
            "good": snapshot.counts.good,
            "moderate": snapshot.counts.moderate,
            "critical": snapshot.counts.critical,
        },
        "vehicles": vehicles,
    });

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &payload)?;
    Ok(())
}
