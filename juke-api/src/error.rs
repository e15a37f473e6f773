use rest_client::RestError;
use thiserror::Error;

/// High-level API errors for Juke operations
///
/// Abstracts the transport-level failures into the three categories the
/// bridge layer cares about: the network failed, the body didn't decode, or
/// the controller doesn't know the id we asked about.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Response decode error
    #[error("Decode error: {0}")]
    Parse(String),

    /// The controller doesn't know the requested zone or device
    #[error("Unknown zone or device: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Volume outside the 0-100 range
    #[error("Invalid volume: {0}")]
    InvalidVolume(u8),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<RestError> for ApiError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Network(msg) => ApiError::Network(msg),
            RestError::Parse(msg) => ApiError::Parse(msg),
            RestError::Status(code) => ApiError::Status(code),
        }
    }
}

/// Map a transport error, turning a 404 into `NotFound` for `id`
pub(crate) fn with_id_context(error: RestError, id: &str) -> ApiError {
    match error {
        RestError::Status(404) => ApiError::NotFound(id.to_string()),
        other => other.into(),
    }
}
