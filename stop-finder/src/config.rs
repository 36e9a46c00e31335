//! Process configuration, read once at startup.

use std::net::SocketAddr;

use tracing::warn;

use crate::geocoder::GeocoderConfig;
use crate::stops::StopsConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `HTTP_TIMEOUT_SECS` is not a whole number of seconds
    #[error("invalid HTTP_TIMEOUT_SECS {value:?}: expected whole seconds")]
    InvalidTimeout { value: String },

    /// `BIND_ADDR` is not a socket address
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Geocoding client settings
    pub geocoder: GeocoderConfig,
    /// Stops client settings
    pub stops: StopsConfig,
    /// Address to listen on
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let access_token = var("MAPBOX_TOKEN").unwrap_or_else(|| {
            warn!("MAPBOX_TOKEN not set. Geocoding requests will fail.");
            String::new()
        });

        let timeout_secs = var("HTTP_TIMEOUT_SECS")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout { value })
            })
            .transpose()?;

        let mut geocoder = GeocoderConfig::new(access_token).with_timeout(timeout_secs);
        if let Some(url) = var("MAPBOX_BASE_URL") {
            geocoder = geocoder.with_base_url(url);
        }

        let mut stops = StopsConfig::new(var("MBTA_API_KEY")).with_timeout(timeout_secs);
        if let Some(url) = var("MBTA_BASE_URL") {
            stops = stops.with_base_url(url);
        }

        let bind_value = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            geocoder,
            stops,
            bind_addr,
        })
    }
}
