//! Cache subsystem errors.
//!
//! None of these reach an end caller: the adapter and orchestrator turn them
//! into misses or log lines.

use thiserror::Error;

/// Errors raised by cache stores and the entry codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Transport failure or timeout talking to the key-value store.
    #[error("Cache store unavailable: {0}")]
    StoreUnavailable(String),

    /// Stored bytes do not match the expected schema.
    #[error("Failed to decode cache entry: {0}")]
    Decode(String),

    /// A value could not be serialized for storage.
    #[error("Failed to encode cache entry: {0}")]
    Encode(String),
}

impl CacheError {
    /// Short label used for log fields and metric labels.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
        }
    }
}

/// Result type for raw store operations.
pub type StoreResult<T> = std::result::Result<T, CacheError>;
