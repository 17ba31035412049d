//! Journey client error types.

use super::convert::NormalizeError;

/// Errors from the TfL journey client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// Transport-level failure (network error, timeout), passed through
    /// without interpretation
    #[error("upstream failure: {0}")]
    Upstream(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid application credentials
    #[error("unauthorized: check app_id and app_key")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the journey planner API")]
    RateLimited,

    /// Response body did not parse as the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The response deserialized but could not be normalized
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
