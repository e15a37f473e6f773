//! Error types for the bridge layer

use juke_api::ApiError;
use thiserror::Error;

/// Errors surfaced by bridge operations
///
/// Remote failures pass through unchanged: the caller decides how to degrade
/// (the framework shows "not responding", a retry is never automatic).
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The remote controller call failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Type alias for results that can return a BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
