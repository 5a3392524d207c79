//! Client error types.

use thiserror::Error;

/// Boundary error raised by the REST client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, malformed response).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the payload (400).
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested record does not exist (404).
    ///
    /// Detail wrappers translate this to `Ok(None)` before callers see it.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("service error ({status}): {body}")]
    Service { status: u16, body: String },

    /// A payload failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
