//! Mapbox geocoding HTTP client.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{Coordinates, Lookup};
use crate::fetch::fetch_json;
use crate::finder::Geocode;

use super::error::GeocodeError;
use super::types::first_coordinates;

/// Default base URL for the Mapbox API.
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Path of the forward-geocoding endpoint (Geocoding API v6).
const FORWARD_PATH: &str = "/search/geocode/v6/forward";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Mapbox access token, sent as the `access_token` query parameter
    pub access_token: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves the transport default
    pub timeout_secs: Option<u64>,
}

impl GeocoderConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: Option<u64>) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Mapbox forward-geocoding endpoint.
#[derive(Debug, Clone)]
pub struct MapboxGeocoder {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxGeocoder {
    /// Create a new geocoding client.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token,
        })
    }

    /// Resolve a place name to the coordinates of the first candidate.
    ///
    /// The place name is sent as given, query-encoded by the HTTP client. A
    /// name that is blank after trimming is [`Lookup::NotFound`] without
    /// contacting the service.
    pub async fn lookup(&self, place_name: &str) -> Result<Lookup<Coordinates>, GeocodeError> {
        if place_name.trim().is_empty() {
            debug!("blank place name, skipping geocoding");
            return Ok(Lookup::NotFound);
        }

        let request = self
            .http
            .get(format!("{}{}", self.base_url, FORWARD_PATH))
            .query(&[("q", place_name), ("access_token", self.access_token.as_str())]);

        let body = match fetch_json(request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(place_name, error = %e, "geocoding request failed");
                return Ok(Lookup::Unavailable(e));
            }
        };

        let lookup = first_coordinates(&body)?;
        match &lookup {
            Lookup::Found(coords) => debug!(place_name, %coords, "place geocoded"),
            _ => info!(place_name, "location not found"),
        }

        Ok(lookup)
    }
}

impl Geocode for MapboxGeocoder {
    async fn geocode(&self, place_name: &str) -> Result<Lookup<Coordinates>, GeocodeError> {
        self.lookup(place_name).await
    }
}
