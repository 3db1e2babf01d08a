//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. The event
//! path itself never fails; these surface only from level parsing and
//! property loading.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the framework events adapter.
#[derive(Error, Debug)]
pub enum Error {
    /// A string did not name a severity or threshold.
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel(value.into())
    }
}
