//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Key is not usable as a slot name.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Underlying filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CacheError {
    /// Whether the stored bytes were present but could not be decoded.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CacheError::SerializeError(_))
    }
}
