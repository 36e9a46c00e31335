//! Stop locator error types.

/// Errors that escape the stop locator.
///
/// Fetch failures are absorbed into
/// [`Lookup::Unavailable`](crate::domain::Lookup::Unavailable) instead.
#[derive(Debug, thiserror::Error)]
pub enum StopError {
    /// The HTTP client could not be constructed
    #[error("failed to build stops client: {0}")]
    Client(#[from] reqwest::Error),

    /// The API key is not a valid header value
    #[error("invalid MBTA API key format")]
    InvalidApiKey,

    /// The nearest stop entry lacked a name
    #[error("malformed stop entry: {message}")]
    MalformedStop { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StopError::MalformedStop {
            message: "missing field `name`".into(),
        };
        assert_eq!(err.to_string(), "malformed stop entry: missing field `name`");

        assert_eq!(
            StopError::InvalidApiKey.to_string(),
            "invalid MBTA API key format"
        );
    }
}
