//! Session system for ephemeral user sessions
//!
//! This crate layers a typed session on the shared cache store: one key
//! namespace, one fixed TTL, and a person lookup at creation time.

pub mod directory;
pub mod errors;
pub mod prelude;
pub mod service;
pub mod session;

// Re-export centralized config
pub use config::SessionConfig;

pub use directory::{InMemoryPersonDirectory, PersonDirectory, PersonRecord};
pub use errors::SessionError;
pub use service::SessionService;
pub use session::Session;
