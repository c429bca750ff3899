//! Spatial predicates over raw decimal-degree coordinates.
//!
//! Proximity in this simulation is an axis-aligned box check, not great-circle
//! distance: two vehicles are in range when the absolute latitude difference
//! AND the absolute longitude difference are both within the threshold.

use crate::ecs::GeoPosition;

/// True when both axis deltas are within `range_deg`, inclusive.
pub fn within_box_deg(a: GeoPosition, b: GeoPosition, range_deg: f64) -> bool {
    (a.lat - b.lat).abs() <= range_deg && (a.lon - b.lon).abs() <= range_deg
}

/// Chebyshev distance in degrees: the larger of the two axis deltas.
pub fn box_distance_deg(a: GeoPosition, b: GeoPosition) -> f64 {
    (a.lat - b.lat).abs().max((a.lon - b.lon).abs())
}
