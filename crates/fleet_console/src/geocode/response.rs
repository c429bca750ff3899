/// Best match for a place-name search.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodeMatch {
    pub lat: f64,
    pub lon: f64,
    /// Full display name of the matched place, e.g. "Chennai, Tamil Nadu,
    /// India".
    pub display_name: String,
}

/// One result row as Nominatim serializes it. Coordinates arrive as JSON
/// strings, not numbers.
#[derive(Debug, serde::Deserialize)]
pub(super) struct NominatimPlace {
    pub(super) lat: String,
    pub(super) lon: String,
    pub(super) display_name: String,
}
