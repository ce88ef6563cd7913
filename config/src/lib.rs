//! # Configuration Management for Memstash
//!
//! This crate provides centralized configuration structures for all Memstash components:
//! the expiring cache store and the session service layered on top of it.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{CacheConfig, SessionConfig};
//! use std::time::Duration;
//!
//! let cache_config = CacheConfig::default()
//!     .with_sweep_interval(Duration::from_millis(500))
//!     .with_default_ttl(600);
//!
//! let session_config = SessionConfig::default().with_ttl(900);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [cache]
//! sweep_interval_ms = 1000
//! default_ttl_seconds = 1800
//! enable_sweeper = true
//!
//! [session]
//! ttl_seconds = 1200
//! key_prefix = "SESSION-"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from memstash.toml (or the path in MEMSTASH_CONFIG)
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path, time::Duration};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./memstash.toml";
const CONFIG_PATH_VAR: &str = "MEMSTASH_CONFIG";

/// Sweep interval used when none is configured.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 1000;

/// TTL applied by `set_default` (30 minutes).
pub const DEFAULT_TTL_SECONDS: i64 = 30 * 60;

/// Lifetime of a session entry (20 minutes).
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 20 * 60;

/// Namespace prepended to every session id.
pub const DEFAULT_SESSION_PREFIX: &str = "SESSION-";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Cache store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Milliseconds between two expiry sweeps
    pub sweep_interval_ms: u64,
    /// TTL used by `set_default`; zero or negative never expires
    pub default_ttl_seconds: i64,
    /// Whether the background sweeper is spawned at all.
    /// Without it expired entries are only reclaimed on read.
    pub enable_sweeper: bool,
}

/// Session service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub ttl_seconds: u64,
    pub key_prefix: String,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, the variable may come from the process environment
        dotenvy::dotenv().ok();

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.sweep_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "Cache sweep_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.session.ttl_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Session ttl_seconds must be greater than 0".to_string(),
            ));
        }
        if self.session.key_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "Session key_prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl CacheConfig {
    /// Create a new cache configuration
    pub fn new(sweep_interval_ms: u64, default_ttl_seconds: i64, enable_sweeper: bool) -> Self {
        Self {
            sweep_interval_ms,
            default_ttl_seconds,
            enable_sweeper,
        }
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval_ms = u64::try_from(interval.as_millis().max(1)).unwrap_or(u64::MAX);
        self
    }

    pub fn with_default_ttl(mut self, ttl_seconds: i64) -> Self {
        self.default_ttl_seconds = ttl_seconds;
        self
    }

    /// Disable the background sweeper; expiry then happens lazily on read.
    pub fn without_sweeper(mut self) -> Self {
        self.enable_sweeper = false;
        self
    }

    /// Get sweep interval as Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms.max(1))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            default_ttl_seconds: DEFAULT_TTL_SECONDS,
            enable_sweeper: true,
        }
    }
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(ttl_seconds: u64, key_prefix: impl Into<String>) -> Self {
        Self {
            ttl_seconds,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// Get session TTL as Duration
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            key_prefix: DEFAULT_SESSION_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_policy() {
        let config = AppConfig::default();
        assert_eq!(config.cache.sweep_interval(), Duration::from_millis(1000));
        assert_eq!(config.cache.default_ttl_seconds, 1800);
        assert!(config.cache.enable_sweeper);
        assert_eq!(config.session.ttl_duration(), Duration::from_secs(1200));
        assert_eq!(config.session.key_prefix, "SESSION-");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [cache]
            sweep_interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.cache.sweep_interval_ms, 250);
        assert_eq!(config.cache.default_ttl_seconds, DEFAULT_TTL_SECONDS);
        assert_eq!(config.session.ttl_seconds, DEFAULT_SESSION_TTL_SECONDS);
    }

    #[test]
    fn test_full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [cache]
            sweep_interval_ms = 500
            default_ttl_seconds = -1
            enable_sweeper = false

            [session]
            ttl_seconds = 60
            key_prefix = "S:"
            "#,
        )
        .unwrap();

        assert_eq!(config.cache.default_ttl_seconds, -1);
        assert!(!config.cache.enable_sweeper);
        assert_eq!(config.session.ttl_seconds, 60);
        assert_eq!(config.session.key_prefix, "S:");
    }

    #[test]
    fn test_zero_sweep_interval_rejected() {
        let result = AppConfig::from_toml_str("[cache]\nsweep_interval_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_session_prefix_rejected() {
        let result = AppConfig::from_toml_str("[session]\nkey_prefix = \"\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = AppConfig::from_toml_str("[cache\nsweep_interval_ms = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_builders() {
        let cache = CacheConfig::default()
            .with_sweep_interval(Duration::from_millis(20))
            .with_default_ttl(5)
            .without_sweeper();
        assert_eq!(cache.sweep_interval_ms, 20);
        assert_eq!(cache.default_ttl_seconds, 5);
        assert!(!cache.enable_sweeper);

        let huge = CacheConfig::default().with_sweep_interval(Duration::MAX);
        assert_eq!(huge.sweep_interval_ms, u64::MAX);
        let tiny = CacheConfig::default().with_sweep_interval(Duration::from_micros(10));
        assert_eq!(tiny.sweep_interval_ms, 1);

        let session = SessionConfig::default().with_ttl(30).with_key_prefix("S-");
        assert_eq!(session.ttl_seconds, 30);
        assert_eq!(session.key_prefix, "S-");
    }
}
