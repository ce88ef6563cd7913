//! Error types for session operations

use cache_system::CacheError;
use thiserror::Error;

/// Session system errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to store session: {0}")]
    Store(#[from] CacheError),
}
