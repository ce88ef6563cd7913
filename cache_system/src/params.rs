//! Cache parameter configuration
//!
//! This module defines the CacheParams struct: a store handle bound to one
//! key prefix and one TTL policy, for consumers that keep a single kind of
//! entity in the shared store.

use crate::entry::Ttl;
use crate::outcome::{DeleteOutcome, ExtendOutcome, SetOutcome};
use crate::CacheStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Cache parameters for one entity kind: store, TTL and key prefix
#[derive(Debug, Clone)]
pub struct CacheParams {
    /// The shared store instance
    pub store: CacheStore,
    /// TTL applied on every write and renewal
    pub ttl: Ttl,
    /// Prefix for cache keys
    pub prefix: String,
}

impl CacheParams {
    pub fn new(store: CacheStore, ttl: impl Into<Ttl>, prefix: &str) -> Self {
        Self {
            ttl: ttl.into(),
            prefix: prefix.to_string(),
            store,
        }
    }

    /// Full store key for an entity id
    pub fn key(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }

    pub fn set<T>(&self, id: &str, value: &T) -> SetOutcome
    where
        T: Serialize + ?Sized,
    {
        self.store.set(self.key(id), value, self.ttl)
    }

    pub fn get<T>(&self, id: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        self.store.get(&self.key(id))
    }

    pub fn delete(&self, id: &str) -> DeleteOutcome {
        self.store.delete(&self.key(id))
    }

    /// Push the entry's expiry back to a full TTL from now
    pub fn renew(&self, id: &str) -> ExtendOutcome {
        self.store.extend_expiry(&self.key(id), self.ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::CacheConfig;

    #[test]
    fn test_namespaced_keys() {
        let store = CacheStore::new(CacheConfig::default().without_sweeper());
        let params = CacheParams::new(store.clone(), Ttl::secs(60), "SHOP-");

        assert_eq!(params.key("42"), "SHOP-42");
        assert!(params.set("42", "corner shop").is_stored());

        assert_eq!(store.get::<String>("SHOP-42").as_deref(), Some("corner shop"));
        assert_eq!(params.get::<String>("42").as_deref(), Some("corner shop"));
        assert!(params.renew("42").is_extended());
        assert!(params.delete("42").is_deleted());
        assert!(matches!(params.renew("42"), ExtendOutcome::NotFound));
    }

    #[test]
    fn test_legacy_signed_ttl() {
        let store = CacheStore::new(CacheConfig::default().without_sweeper());
        let params = CacheParams::new(store, -1i64, "C-");
        assert_eq!(params.ttl, Ttl::Never);
    }
}
