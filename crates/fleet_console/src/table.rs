//! Per-vehicle status table in the format of the original fleet monitor.

use fleet_core::proximity::{
    assess_accident_risk, congestion_level, find_nearby, AccidentRisk, CongestionLevel,
    ProximityConfig,
};
use fleet_core::telemetry::{FleetSnapshot, VehicleSnapshot};

/// Marker colors cycled by roster index.
pub const MARKER_COLORS: [&str; 8] = [
    "blue", "red", "green", "yellow", "orange", "grey", "black", "violet",
];

pub const TRAFFIC_DETECTED: &str = "Traffic detected! Take an alternate route.";
pub const ROUTE_CLEAR: &str = "Route clear! Proceed with the journey.";
pub const NO_RISK: &str = "No risk";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRow {
    pub id: u32,
    pub color: &'static str,
    pub speed_kmh: f64,
    pub condition: String,
    pub direction: String,
    pub location: String,
    pub nearby_ids: String,
    pub nearby_info: String,
    pub traffic_status: String,
    pub accident_status: String,
}

pub fn marker_color(index: usize) -> &'static str {
    MARKER_COLORS[index % MARKER_COLORS.len()]
}

fn format_location(vehicle: &VehicleSnapshot) -> String {
    format!(
        "[{:.4}, {:.4}]",
        vehicle.position.lat, vehicle.position.lon
    )
}

fn format_nearby_ids(nearby: &[&VehicleSnapshot]) -> String {
    if nearby.is_empty() {
        return "None".to_string();
    }
    nearby
        .iter()
        .map(|vehicle| vehicle.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_nearby_info(nearby: &[&VehicleSnapshot]) -> String {
    if nearby.is_empty() {
        return "None".to_string();
    }
    nearby
        .iter()
        .map(|vehicle| {
            format!(
                "ID: {}, Speed: {:.1}, Direction: {}, Condition: {}",
                vehicle.id, vehicle.speed_kmh, vehicle.direction, vehicle.condition
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_traffic_status(level: CongestionLevel) -> &'static str {
    match level {
        CongestionLevel::Congested => TRAFFIC_DETECTED,
        CongestionLevel::Clear => ROUTE_CLEAR,
    }
}

fn format_accident_status(risk: &AccidentRisk) -> String {
    match risk {
        AccidentRisk::Clear => NO_RISK.to_string(),
        AccidentRisk::Risk(ids) => format!(
            "Accident risk with vehicle(s): {}",
            ids.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Builds all rows for one snapshot, in roster order.
pub fn build_rows(snapshot: &FleetSnapshot, config: &ProximityConfig) -> Vec<VehicleRow> {
    snapshot
        .vehicles
        .iter()
        .enumerate()
        .map(|(index, vehicle)| {
            let nearby = find_nearby(vehicle, &snapshot.vehicles, config);
            let level = congestion_level(nearby.len());
            let risk = assess_accident_risk(vehicle, &nearby, &snapshot.vehicles, config);
            VehicleRow {
                id: vehicle.id,
                color: marker_color(index),
                speed_kmh: vehicle.speed_kmh,
                condition: vehicle.condition.to_string(),
                direction: vehicle.direction.to_string(),
                location: format_location(vehicle),
                nearby_ids: format_nearby_ids(&nearby),
                nearby_info: format_nearby_info(&nearby),
                traffic_status: format_traffic_status(level).to_string(),
                accident_status: format_accident_status(&risk),
            }
        })
        .collect()
}

/// Renders the snapshot as a plain-text table. `headline` names the city the
/// fleet is centered on.
pub fn render_table(snapshot: &FleetSnapshot, config: &ProximityConfig, headline: &str) -> String {
    let counts = snapshot.counts;
    let mut out = format!(
        "Fleet at {} ms | {} | {} vehicles (Good {} / Moderate {} / Critical {})\n",
        snapshot.timestamp_ms,
        headline,
        counts.total(),
        counts.good,
        counts.moderate,
        counts.critical,
    );
    out.push_str(&format!(
        "{:>4}  {:<7}  {:>6}  {:<9}  {:<11}  {:<20}  {:<14}  {:<42}  {}\n",
        "ID", "COLOR", "SPEED", "CONDITION", "DIRECTION", "LOCATION", "NEARBY", "TRAFFIC",
        "ACCIDENT"
    ));

    for row in build_rows(snapshot, config) {
        out.push_str(&format!(
            "{:>4}  {:<7}  {:>6.1}  {:<9}  {:<11}  {:<20}  {:<14}  {:<42}  {}\n",
            row.id,
            row.color,
            row.speed_kmh,
            row.condition,
            row.direction,
            row.location,
            row.nearby_ids,
            row.traffic_status,
            row.accident_status,
        ));
        if row.nearby_info != "None" {
            out.push_str(&format!("      nearby: {}\n", row.nearby_info));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use fleet_core::telemetry::FleetCounts;
    use fleet_core::test_helpers::vehicle_snapshot;

    use super::*;

    fn snapshot_of(vehicles: Vec<fleet_core::telemetry::VehicleSnapshot>) -> FleetSnapshot {
        let mut counts = FleetCounts::default();
        for vehicle in &vehicles {
            counts.add_vehicle(vehicle.condition);
        }
        FleetSnapshot {
            timestamp_ms: 2_000,
            counts,
            vehicles,
        }
    }

    #[test]
    fn reference_scenario_rows_flag_the_fast_pair() {
        let snapshot = snapshot_of(vec![
            vehicle_snapshot(1, 13.0827, 80.2707, 60.0),
            vehicle_snapshot(2, 13.0837, 80.2717, 70.0),
            vehicle_snapshot(3, 20.0, 80.0, 80.0),
        ]);
        let rows = build_rows(&snapshot, &ProximityConfig::default());

        assert_eq!(rows[0].nearby_ids, "2");
        assert_eq!(rows[0].accident_status, "Accident risk with vehicle(s): 2");
        assert_eq!(rows[0].traffic_status, ROUTE_CLEAR);

        assert_eq!(rows[1].nearby_ids, "1");
        assert_eq!(rows[1].accident_status, "Accident risk with vehicle(s): 1");

        assert_eq!(rows[2].nearby_ids, "None");
        assert_eq!(rows[2].nearby_info, "None");
        assert_eq!(rows[2].accident_status, NO_RISK);
    }

    #[test]
    fn six_vehicle_pileup_reports_congestion() {
        let vehicles: Vec<_> = (1..=6u32)
            .map(|id| {
                let offset = f64::from(id) * 0.0005;
                vehicle_snapshot(id, 13.0 + offset, 80.0 + offset, 30.0)
            })
            .collect();
        let snapshot = snapshot_of(vehicles);
        let rows = build_rows(&snapshot, &ProximityConfig::default());

        for row in &rows {
            assert_eq!(row.traffic_status, TRAFFIC_DETECTED);
            // Slow cluster: congested but not an accident risk.
            assert_eq!(row.accident_status, NO_RISK);
        }
    }

    #[test]
    fn nearby_info_uses_the_monitor_format() {
        let snapshot = snapshot_of(vec![
            vehicle_snapshot(1, 13.0, 80.0, 55.0),
            vehicle_snapshot(2, 13.001, 80.001, 70.0),
        ]);
        let rows = build_rows(&snapshot, &ProximityConfig::default());

        assert_eq!(
            rows[0].nearby_info,
            "ID: 2, Speed: 70.0, Direction: North, Condition: Good"
        );
    }

    #[test]
    fn locations_render_with_four_decimals() {
        let snapshot = snapshot_of(vec![vehicle_snapshot(1, 13.082712, 80.270198, 40.0)]);
        let rows = build_rows(&snapshot, &ProximityConfig::default());
        assert_eq!(rows[0].location, "[13.0827, 80.2702]");
    }

    #[test]
    fn marker_colors_cycle_by_roster_index() {
        assert_eq!(marker_color(0), "blue");
        assert_eq!(marker_color(7), "violet");
        assert_eq!(marker_color(8), "blue");
        assert_eq!(marker_color(12), "orange");
    }

    #[test]
    fn render_table_includes_headline_and_every_row() {
        let snapshot = snapshot_of(vec![
            vehicle_snapshot(1, 13.0827, 80.2707, 60.0),
            vehicle_snapshot(2, 13.0837, 80.2717, 70.0),
        ]);
        let rendered = render_table(&snapshot, &ProximityConfig::default(), "Chennai");

        assert!(rendered.starts_with("Fleet at 2000 ms | Chennai | 2 vehicles"));
        assert!(rendered.contains("[13.0827, 80.2707]"));
        assert!(rendered.contains(ROUTE_CLEAR));
        assert!(rendered.contains("Accident risk with vehicle(s): 2"));
        assert!(rendered.contains("nearby: ID: 2, Speed: 70.0"));
    }
}
