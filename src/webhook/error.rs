//! Error types for HTTP and webhook operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level without dictating
/// recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a single notification delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request never produced a response.
    #[error("Error sending webhook: {0}")]
    Http(#[from] HttpError),

    /// The endpoint answered with something other than `204 No Content`.
    #[error("Failed to send webhook. Status code: {}", status.as_u16())]
    UnexpectedStatus {
        /// The status returned by the endpoint
        status: http::StatusCode,
        /// Response body if it was valid UTF-8, capped at [`MAX_ERROR_BODY_CHARS`](super::MAX_ERROR_BODY_CHARS)
        body: Option<String>,
    },

    /// The payload could not be encoded as JSON.
    #[error("Failed to serialize webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
