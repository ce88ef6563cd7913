//! Convenience re-exports for common session-system usage

pub use crate::directory::{InMemoryPersonDirectory, PersonDirectory, PersonRecord};
pub use crate::errors::SessionError;
pub use crate::service::SessionService;
pub use crate::session::Session;

// Re-export centralized config
pub use config::SessionConfig;

// Common external dependencies
pub use async_trait::async_trait;
