//! Country reference data, cached forever after the first load
//!
//! The repository is the system of record. The facade reads through the shared
//! cache and only goes to the repository on a miss or an empty cached list.

use crate::errors::MemstashError;
use async_trait::async_trait;
use cache_system::{debug_log, CacheStore, SetOutcome, Ttl};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// Cache key the country list lives under
pub const COUNTRIES_CACHE_KEY: &str = "countries";

fn default_minor_unit() -> u8 {
    2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    /// Decimal places of the minor unit, 2 or 3
    #[serde(default = "default_minor_unit")]
    pub minor_unit: u8,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol_native: Option<String>,
    #[serde(default)]
    pub rounding: Option<String>,
    #[serde(default)]
    pub name_plural: Option<String>,
}

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            minor_unit: default_minor_unit(),
            symbol: None,
            name: None,
            symbol_native: None,
            rounding: None,
            name_plural: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub calling_code: Option<u32>,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: Some(name.into()),
            currency: None,
            calling_code: None,
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_calling_code(mut self, calling_code: u32) -> Self {
        self.calling_code = Some(calling_code);
        self
    }
}

/// Source of truth for reference data
#[async_trait]
pub trait MasterDataRepository: Send + Sync {
    async fn load_countries(&self) -> anyhow::Result<Vec<Country>>;
}

/// Read-through access to reference data
#[derive(Clone)]
pub struct MasterDataFacade {
    repository: Arc<dyn MasterDataRepository>,
    cache: CacheStore,
}

impl Debug for MasterDataFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterDataFacade")
            .field("cache", &self.cache)
            .finish()
    }
}

impl MasterDataFacade {
    pub fn new(repository: Arc<dyn MasterDataRepository>, cache: CacheStore) -> Self {
        Self { repository, cache }
    }

    /// Load all countries, from the cache when a non-empty list is there.
    ///
    /// A fresh load is cached without expiry. Failing to cache it is logged
    /// and does not fail the call.
    pub async fn load_countries(&self) -> Result<Vec<Country>, MemstashError> {
        if let Some(countries) = self.cache.get::<Vec<Country>>(COUNTRIES_CACHE_KEY)
            && !countries.is_empty()
        {
            return Ok(countries);
        }

        debug_log!("country cache miss, loading from repository");
        let countries = self.repository.load_countries().await?;

        if let SetOutcome::Failed(err) = self.cache.set(COUNTRIES_CACHE_KEY, &countries, Ttl::Never) {
            tracing::warn!(error = %err, "Failed to cache country list");
        }

        Ok(countries)
    }

    /// Forget the cached list so the next load hits the repository
    pub fn invalidate_countries(&self) {
        let _ = self.cache.delete(COUNTRIES_CACHE_KEY);
    }
}
