//! Nominatim-backed place-name lookup for fleet recentering.
//!
//! One free-text query resolves to at most one match (`limit=1`). Successful
//! lookups are cached process-wide so repeated searches for the same city
//! stay off the network.

mod client;
mod error;
mod parser;
mod response;


pub use client::{GeocodeClient, DEFAULT_ENDPOINT};
pub use error::GeocodeError;
pub use response::GeocodeMatch;
