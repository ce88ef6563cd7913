//! Cache system for in-process expiring storage
//!
//! This crate provides the memory-backed cache store, its background
//! expiry sweeper, and the namespaced views consumers build on it.

pub mod codec;
pub mod entry;
pub mod errors;
pub mod outcome;
pub mod params;
pub mod prelude;
pub mod store;
pub mod sweeper;

// Re-export centralized config
pub use config::CacheConfig;

pub use entry::{Expiry, Ttl};
pub use errors::CacheError;
pub use outcome::{DeleteOutcome, ExtendOutcome, SetOutcome};
pub use params::CacheParams;
pub use store::{CacheStats, CacheStore};
pub use sweeper::ExpirySweeper;

#[doc(hidden)]
pub use tracing as __tracing;

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::__tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}
