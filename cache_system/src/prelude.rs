//! Convenience re-exports for common cache-system usage

// Core cache system components
pub use crate::entry::{Expiry, Ttl};
pub use crate::errors::CacheError;
pub use crate::outcome::{DeleteOutcome, ExtendOutcome, SetOutcome};
pub use crate::params::CacheParams;
pub use crate::store::{CacheStats, CacheStore};

// Re-export centralized config
pub use config::CacheConfig;

// Common external dependencies
pub use serde::{Deserialize, Serialize};
pub use serde_json;
pub use tokio;
