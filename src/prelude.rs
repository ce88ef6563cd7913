//! Convenience re-exports for common Memstash usage
//!
//! # Example
//!
//! ```rust
//! use memstash::prelude::*;
//! ```

// Core Memstash components
pub use crate::core::Memstash;
pub use crate::errors::MemstashError;
pub use crate::master_data::{
    COUNTRIES_CACHE_KEY, Country, Currency, MasterDataFacade, MasterDataRepository,
};

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, SessionConfig};

// Re-export cache system
pub use cache_system::prelude::*;

// Re-export session system
pub use session_system::prelude::*;

// Common external dependencies
pub use anyhow;
pub use tokio;
