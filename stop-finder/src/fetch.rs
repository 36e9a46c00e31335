//! Shared GET-and-decode step for the upstream JSON APIs.
//!
//! Both stages issue exactly one GET per lookup and only care whether a JSON
//! document came back. Anything that stops that from happening is reported
//! as a [`FetchError`], which the stages absorb into
//! [`Lookup::Unavailable`](crate::domain::Lookup::Unavailable) rather than
//! propagating.

use reqwest::RequestBuilder;
use serde_json::Value;

/// Longest body excerpt kept on a [`FetchError::Status`].
const MAX_BODY_EXCERPT: usize = 500;

/// Errors that can occur while fetching a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were rejected
    #[error("unauthorized: check the configured access token (status {status})")]
    Unauthorized { status: u16 },

    /// API returned a non-success status
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

/// Send `request` and decode the response body as JSON.
pub async fn fetch_json(request: RequestBuilder) -> Result<Value, FetchError> {
    let response = request.send().await?;
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(FetchError::Unauthorized {
            status: status.as_u16(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: body.chars().take(MAX_BODY_EXCERPT).collect(),
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| FetchError::Json {
        message: e.to_string(),
    })
}
