//! MBTA stops HTTP client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, warn};

use crate::domain::{Coordinates, Lookup, Stop};
use crate::fetch::fetch_json;
use crate::finder::LocateStop;

use super::error::StopError;
use super::types::nearest_stop;

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Configuration for the stops client.
#[derive(Debug, Clone)]
pub struct StopsConfig {
    /// Optional API key for x-api-key header authentication
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves the transport default
    pub timeout_secs: Option<u64>,
}

impl StopsConfig {
    /// Create a new config. Without an API key requests are anonymous.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
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

impl Default for StopsConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Client for the MBTA `/stops` endpoint.
#[derive(Debug, Clone)]
pub struct MbtaStopLocator {
    http: reqwest::Client,
    base_url: String,
}

impl MbtaStopLocator {
    /// Create a new stops client.
    pub fn new(config: StopsConfig) -> Result<Self, StopError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = config.api_key.as_deref().filter(|key| !key.is_empty()) {
            let value = HeaderValue::from_str(api_key).map_err(|_| StopError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Find the stop nearest to `coords`.
    pub async fn nearest(&self, coords: &Coordinates) -> Result<Lookup<Stop>, StopError> {
        let request = self
            .http
            .get(format!("{}/stops", self.base_url))
            .query(&[
                ("sort", "distance"),
                ("filter[latitude]", coords.latitude()),
                ("filter[longitude]", coords.longitude()),
            ]);

        let body = match fetch_json(request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(%coords, error = %e, "stops request failed");
                return Ok(Lookup::Unavailable(e));
            }
        };

        let lookup = nearest_stop(&body)?;
        match &lookup {
            Lookup::Found(stop) => debug!(%coords, stop = %stop.name, "nearest stop found"),
            _ => info!(%coords, "no station found"),
        }

        Ok(lookup)
    }
}

impl LocateStop for MbtaStopLocator {
    async fn locate(&self, coords: &Coordinates) -> Result<Lookup<Stop>, StopError> {
        self.nearest(coords).await
    }
}
