//! Error types for the Memstash crate
//!
//! This module contains all error types that can be returned by Memstash operations.

use config::ConfigError;
use session_system::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemstashError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Repository error: {0}")]
    Repository(#[from] anyhow::Error),
}
