//! Core Memstash functionality
//!
//! This module contains the main Memstash struct: it owns the one cache store
//! of the process and hands out the consumers that share it.

use std::path::Path;
use std::sync::Arc;

use cache_system::CacheStore;
use config::AppConfig;
use session_system::{PersonDirectory, SessionService};

use crate::errors::MemstashError;
use crate::master_data::{MasterDataFacade, MasterDataRepository};

/// Main Memstash coordinator that owns the cache store and wires its consumers
#[derive(Debug, Clone)]
pub struct Memstash {
    config: Arc<AppConfig>,
    cache: CacheStore,
}

impl Memstash {
    /// Create a new Memstash from configuration, starting the expiry sweeper
    /// when a tokio runtime is available
    pub fn new(config: AppConfig) -> Result<Self, MemstashError> {
        config.validate()?;
        let cache = CacheStore::new(config.cache.clone());

        Ok(Self {
            config: Arc::new(config),
            cache,
        })
    }

    /// Create from the TOML file named by `MEMSTASH_CONFIG` or `./memstash.toml`
    pub fn load() -> Result<Self, MemstashError> {
        Self::new(AppConfig::load()?)
    }

    /// Create from a specific TOML file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, MemstashError> {
        Self::new(AppConfig::from_file(path)?)
    }

    /// Get the shared cache store
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Get current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build a session service backed by the shared store
    pub fn session_service(&self, people: Arc<dyn PersonDirectory>) -> SessionService {
        SessionService::new(self.cache.clone(), people, &self.config.session)
    }

    /// Build a reference-data facade backed by the shared store
    pub fn master_data(&self, repository: Arc<dyn MasterDataRepository>) -> MasterDataFacade {
        MasterDataFacade::new(repository, self.cache.clone())
    }

    /// Stop the expiry sweeper and wait for it to finish
    pub async fn shutdown(&self) {
        self.cache.shutdown().await;
    }
}
