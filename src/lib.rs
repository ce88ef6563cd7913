//! # Memstash
//!
//! An in-process expiring cache with a background sweeper, the session service
//! built on it, and read-through caching for reference data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memstash::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let memstash = Memstash::new(AppConfig::default())?;
//!
//!     let cache = memstash.cache();
//!     let _ = cache.set("greeting", "hello", Ttl::secs(60));
//!     let greeting: Option<String> = cache.get("greeting");
//!     println!("{:?}", greeting);
//!
//!     let people = Arc::new(InMemoryPersonDirectory::new());
//!     let sessions = memstash.session_service(people);
//!     let session = sessions.init("jane@example.com").await?;
//!     assert_eq!(sessions.get(&session.id).await, Some(session.clone()));
//!
//!     sessions.expire(&session.id).await;
//!     memstash.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod master_data;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Memstash;
pub use errors::MemstashError;
pub use master_data::{Country, Currency, MasterDataFacade, MasterDataRepository};

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, SessionConfig};

// Re-export internal crates
pub use cache_system;
pub use session_system;

// Re-export external dependencies used in public API
pub use async_trait;
