//! Geocoder error types.

/// Errors that escape the geocoder.
///
/// Fetch failures are not listed here; they are absorbed into
/// [`Lookup::Unavailable`](crate::domain::Lookup::Unavailable).
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The HTTP client could not be constructed
    #[error("failed to build geocoding client: {0}")]
    Client(#[from] reqwest::Error),

    /// The first candidate did not carry usable coordinates
    #[error("malformed geocoding feature: {message}")]
    MalformedFeature { message: String },
}
