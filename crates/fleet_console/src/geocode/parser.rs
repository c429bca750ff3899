use super::error::GeocodeError;
use super::response::{GeocodeMatch, NominatimPlace};

/// Reduce a Nominatim search response to its first match.
pub(super) fn parse_search_response(
    places: Vec<NominatimPlace>,
) -> Result<GeocodeMatch, GeocodeError> {
    let place = places.into_iter().next().ok_or(GeocodeError::NoResult)?;

    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidCoordinate(place.lat.clone()))?;
    let lon = place
        .lon
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidCoordinate(place.lon.clone()))?;

    Ok(GeocodeMatch {
        lat,
        lon,
        display_name: place.display_name,
    })
}
