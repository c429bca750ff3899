/// Errors encountered while resolving a place-name query.
#[derive(Debug)]
pub enum GeocodeError {
    Http(reqwest::Error),
    Json(reqwest::Error),
    Api(String),
    /// Nominatim returned a coordinate that does not parse as a float.
    InvalidCoordinate(String),
    NoResult,
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}
