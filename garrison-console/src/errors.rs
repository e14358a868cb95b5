//! API error types
//!
//! Error taxonomy for the admin API client, using thiserror for proper
//! error trait implementations.

use thiserror::Error;

/// Failures surfaced by the admin API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server (DNS, connect, timeout)
    #[error("request failed to reach the server: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server responded with status {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded
    #[error("failed to decode server response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error)
        } else {
            ApiError::Network(error)
        }
    }
}
