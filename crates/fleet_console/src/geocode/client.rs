use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use lru::LruCache;
use reqwest::blocking::Client;
use reqwest::Url;

use super::error::GeocodeError;
use super::parser::parse_search_response;
use super::response::{GeocodeMatch, NominatimPlace};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
const CACHE_SIZE: usize = 256;

/// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("fleet_console/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

/// Process-wide cache of successful lookups, keyed by normalized query.
fn search_cache() -> &'static Mutex<LruCache<String, GeocodeMatch>> {
    static CACHE: OnceLock<Mutex<LruCache<String, GeocodeMatch>>> = OnceLock::new();
    CACHE.get_or_init(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(CACHE_SIZE).expect("cache size must be non-zero"),
        ))
    })
}

/// Cache key for a free-text query.
pub(super) fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Thin blocking client for Nominatim free-text search.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    endpoint: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl GeocodeClient {
    /// Create a client for the given Nominatim endpoint, e.g.
    /// `https://nominatim.openstreetmap.org`.
    pub fn new(endpoint: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build geocode client");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a free-text place name to its best match.
    pub fn search(&self, query: &str) -> Result<GeocodeMatch, GeocodeError> {
        let key = normalize_query(query);
        if key.is_empty() {
            return Err(GeocodeError::NoResult);
        }
        if let Ok(mut cache) = search_cache().lock() {
            if let Some(hit) = cache.get(&key) {
                return Ok(hit.clone());
            }
        }

        let mut url = Url::parse(&format!("{}/search", self.endpoint))
            .map_err(|err| GeocodeError::Api(format!("failed to build search URL: {err}")))?;
        url.query_pairs_mut()
            .append_pair("q", query.trim())
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.client.get(url).send().map_err(GeocodeError::Http)?;
        let places: Vec<NominatimPlace> = response.json().map_err(GeocodeError::Json)?;
        let matched = parse_search_response(places)?;

        // If the mutex was poisoned we simply skip caching.
        if let Ok(mut cache) = search_cache().lock() {
            cache.put(key, matched.clone());
        }
        Ok(matched)
    }
}
