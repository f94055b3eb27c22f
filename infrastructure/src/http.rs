//! Shared reqwest plumbing for the backend adapters.

use mentor_application::GatewayError;
use std::time::Duration;

/// Build a client with a hard per-request timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::ConnectionError(format!("HTTP client setup failed: {}", e)))
}

/// Classify a transport failure.
pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// First `max_chars` characters of an error body, for logs and messages.
pub(crate) fn body_excerpt(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
