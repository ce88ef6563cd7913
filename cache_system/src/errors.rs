//! Error types for cache operations
//!
//! These never cross the store boundary as `Err` from a mutation: `set`,
//! `delete` and `extend_expiry` carry them inside their `Failed` outcome.

use thiserror::Error;

/// Cache system errors
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache map lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
