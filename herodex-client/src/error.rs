//! Error types for the transport layer.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while talking to the hero API.
///
/// These never reach `HeroService` callers; the service intercepts every one,
/// records a diagnostic message, and resolves with a fallback value.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connect failure, DNS, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body was not the JSON the caller expected.
    #[error("malformed payload: {0}")]
    Decode(String),
}

impl TransportError {
    /// Returns true if this error is a 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::Status { status: 404, .. })
    }

    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
