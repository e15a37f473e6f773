//! Error types for the REST client

use thiserror::Error;

/// Errors that can occur while talking to the controller
#[derive(Debug, Error)]
pub enum RestError {
    /// Network or HTTP transport error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Malformed or undecodable response body
    #[error("Response decode error: {0}")]
    Parse(String),

    /// Non-success HTTP status returned by the controller
    #[error("HTTP status {0}")]
    Status(u16),
}
