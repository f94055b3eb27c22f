//! Errors shared by the outbound backend ports.

use thiserror::Error;

/// How an upstream failure is classified for recovery and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Backend unreachable, non-2xx, or timed out
    Unavailable,
    /// Backend answered but the payload failed validation
    Malformed,
}

/// Errors that can occur when calling a generation backend
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl GatewayError {
    pub fn kind(&self) -> UpstreamErrorKind {
        match self {
            GatewayError::MalformedResponse(_) => UpstreamErrorKind::Malformed,
            _ => UpstreamErrorKind::Unavailable,
        }
    }

    /// Check if this error represents a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, GatewayError::Timeout)
    }
}
