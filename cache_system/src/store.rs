//! In-process expiring key/value store
//!
//! This module provides the main CacheStore struct: a string-keyed map of
//! serialized values, each with an optional absolute expiry, plus the
//! background sweeper that reclaims entries nobody reads.

use crate::codec;
use crate::entry::{now_millis, CacheEntry, Expiry, Ttl};
use crate::errors::CacheError;
use crate::outcome::{DeleteOutcome, ExtendOutcome, SetOutcome};
use crate::sweeper::ExpirySweeper;
use crate::{debug_log, trace_log};
use config::CacheConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

type EntryMap = HashMap<String, CacheEntry>;

/// The shared map and its counters. The sweeper only holds a weak reference.
#[derive(Debug, Default)]
pub(crate) struct EntryTable {
    entries: RwLock<EntryMap>,
    expired_evictions: AtomicU64,
}

impl EntryTable {
    fn read(&self, op: &'static str) -> Result<RwLockReadGuard<'_, EntryMap>, CacheError> {
        self.entries.read().map_err(|_| self.recover(op))
    }

    fn write(&self, op: &'static str) -> Result<RwLockWriteGuard<'_, EntryMap>, CacheError> {
        self.entries.write().map_err(|_| self.recover(op))
    }

    /// A panicking writer poisons the lock. The call that finds it fails, the
    /// poison is cleared and later calls use the map as that writer left it.
    fn recover(&self, op: &'static str) -> CacheError {
        tracing::warn!(op, "Cache lock poisoned by a panicking writer, clearing");
        self.entries.clear_poison();
        CacheError::LockPoisoned(op)
    }

    /// Single deletion path shared by explicit deletes and expiry
    fn remove_locked(entries: &mut EntryMap, key: &str) -> Option<CacheEntry> {
        entries.remove(key)
    }

    /// Remove `key` if it is still dead at `now`. A concurrent `set` may have
    /// revived it since the caller looked.
    fn evict_if_expired_locked(&self, entries: &mut EntryMap, key: &str, now: i64) -> bool {
        let expired = entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now));

        if expired {
            Self::remove_locked(entries, key);
            self.expired_evictions.fetch_add(1, Ordering::Relaxed);
            debug_log!("'{}' cache expired", key);
        }

        expired
    }

    /// Evict every entry dead at `now`.
    ///
    /// The scan holds the shared lock, so readers proceed but writers wait for
    /// it. The exclusive lock is taken only to remove what the scan found.
    pub(crate) fn purge_expired(&self, now: i64) -> Result<usize, CacheError> {
        let candidates = self.expired_keys(now)?;
        if candidates.is_empty() {
            return Ok(0);
        }

        self.evict_expired(&candidates, now)
    }

    fn expired_keys(&self, now: i64) -> Result<Vec<String>, CacheError> {
        let entries = self.read("sweep")?;
        Ok(entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn evict_expired(&self, candidates: &[String], now: i64) -> Result<usize, CacheError> {
        let mut entries = self.write("sweep")?;
        let removed = candidates
            .iter()
            .filter(|key| self.evict_if_expired_locked(&mut entries, key, now))
            .count();

        Ok(removed)
    }

    #[cfg(test)]
    pub(crate) fn insert_for_test(&self, key: &str, entry: CacheEntry) {
        self.entries.write().unwrap().insert(key.to_string(), entry);
    }

    #[cfg(test)]
    pub(crate) fn keys_for_test(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Snapshot of store occupancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries physically present, dead or alive
    pub entries: usize,
    /// Entries that have not expired yet
    pub live_entries: usize,
    /// Entries reclaimed by sweeps or expired reads since construction
    pub expired_evictions: u64,
}

/// Expiring in-memory cache store.
///
/// Cloning is cheap and every clone shares the same map. The background
/// sweeper runs until [`stop`](Self::stop)/[`shutdown`](Self::shutdown) is
/// called or the last clone is dropped.
#[derive(Clone)]
pub struct CacheStore {
    table: Arc<EntryTable>,
    config: Arc<CacheConfig>,
    sweeper: Option<Arc<ExpirySweeper>>,
}

impl Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sweeper_status = match &self.sweeper {
            Some(sweeper) if sweeper.is_running() => "running",
            Some(_) => "stopped",
            None => "disabled",
        };

        f.debug_struct("CacheStore")
            .field("config", &self.config)
            .field("entries", &self.len())
            .field("sweeper", &sweeper_status)
            .finish()
    }
}

impl CacheStore {
    /// Create a new cache store and, if enabled, spawn its sweeper on the
    /// current tokio runtime.
    ///
    /// Outside a runtime the store still works; expiry is then only enforced
    /// lazily on read.
    pub fn new(config: CacheConfig) -> Self {
        let table = Arc::new(EntryTable::default());

        let sweeper = if config.enable_sweeper {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => Some(Arc::new(ExpirySweeper::spawn(
                    &handle,
                    Arc::downgrade(&table),
                    config.sweep_interval(),
                ))),
                Err(_) => {
                    tracing::warn!(
                        "No tokio runtime available, cache expiry falls back to lazy eviction"
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            table,
            config: Arc::new(config),
            sweeper,
        }
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn set<T>(&self, key: impl Into<String>, value: &T, ttl: impl Into<Ttl>) -> SetOutcome
    where
        T: Serialize + ?Sized,
    {
        let key = key.into();
        let ttl = ttl.into();

        let value = match codec::encode(value) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to encode cache value");
                return SetOutcome::Failed(err);
            }
        };

        let entry = CacheEntry::new(value, ttl, now_millis());
        match self.table.write("set") {
            Ok(mut entries) => {
                trace_log!("cache set '{}' expiry={:?}", key, entry.expiry);
                entries.insert(key, entry);
                SetOutcome::Stored
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to store cache value");
                SetOutcome::Failed(err)
            }
        }
    }

    /// Store `value` with the configured default TTL
    pub fn set_default<T>(&self, key: impl Into<String>, value: &T) -> SetOutcome
    where
        T: Serialize + ?Sized,
    {
        self.set(key, value, Ttl::from(self.config.default_ttl_seconds))
    }

    /// Read and decode the live value under `key`.
    ///
    /// Returns `Ok(None)` for absent keys and for entries whose expiry has
    /// passed; the latter are removed on the way out.
    pub fn try_get<T>(&self, key: &str) -> Result<Option<T>, CacheError>
    where
        T: DeserializeOwned,
    {
        let now = now_millis();
        {
            let entries = self.table.read("get")?;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired_at(now) => {
                    return codec::decode(&entry.value).map(Some);
                }
                Some(_) => {}
            }
        }

        let mut entries = self.table.write("get")?;
        self.table.evict_if_expired_locked(&mut entries, key, now);
        Ok(None)
    }

    /// Like [`try_get`](Self::try_get), but a decode or lock failure is logged
    /// and reported as a miss.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Cache read failed, treating as miss");
                None
            }
        }
    }

    /// Whether a live entry exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        let now = now_millis();
        self.table
            .read("contains")
            .map(|entries| entries.get(key).is_some_and(|e| !e.is_expired_at(now)))
            .unwrap_or(false)
    }

    /// Expiry of the live entry under `key`
    pub fn expiry_of(&self, key: &str) -> Option<Expiry> {
        let now = now_millis();
        self.table
            .read("expiry_of")
            .ok()?
            .get(key)
            .filter(|e| !e.is_expired_at(now))
            .map(|e| e.expiry)
    }

    /// Remove `key` whatever its expiry state
    pub fn delete(&self, key: &str) -> DeleteOutcome {
        match self.table.write("delete") {
            Ok(mut entries) => match EntryTable::remove_locked(&mut entries, key) {
                Some(_) => {
                    debug_log!("cache delete '{}'", key);
                    DeleteOutcome::Deleted
                }
                None => DeleteOutcome::NotFound,
            },
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to delete cache value");
                DeleteOutcome::Failed(err)
            }
        }
    }

    /// Recompute the expiry of a live entry from now, leaving its value alone.
    /// Absent or already expired keys are not created.
    pub fn extend_expiry(&self, key: &str, ttl: impl Into<Ttl>) -> ExtendOutcome {
        let now = now_millis();
        let ttl = ttl.into();

        let mut entries = match self.table.write("extend_expiry") {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to extend cache expiry");
                return ExtendOutcome::Failed(err);
            }
        };

        if self.table.evict_if_expired_locked(&mut entries, key, now) {
            return ExtendOutcome::NotFound;
        }

        match entries.get_mut(key) {
            Some(entry) => {
                entry.expiry = ttl.expiry_from(now);
                trace_log!("cache extend '{}' expiry={:?}", key, entry.expiry);
                ExtendOutcome::Extended
            }
            None => ExtendOutcome::NotFound,
        }
    }

    /// Run one sweep now, returning how many entries were reclaimed
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        self.table.purge_expired(now_millis())
    }

    /// Drop every entry, returning how many were present
    pub fn clear(&self) -> Result<usize, CacheError> {
        let mut entries = self.table.write("clear")?;
        let count = entries.len();
        entries.clear();
        Ok(count)
    }

    /// Number of entries physically present, including dead ones not yet reclaimed
    pub fn len(&self) -> usize {
        self.table.read("len").map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries that have not expired
    pub fn live_len(&self) -> usize {
        let now = now_millis();
        self.table
            .read("live_len")
            .map(|entries| entries.values().filter(|e| !e.is_expired_at(now)).count())
            .unwrap_or(0)
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let now = now_millis();
        let (entries, live_entries) = self
            .table
            .read("stats")
            .map(|entries| {
                let live = entries.values().filter(|e| !e.is_expired_at(now)).count();
                (entries.len(), live)
            })
            .unwrap_or((0, 0));

        CacheStats {
            entries,
            live_entries,
            expired_evictions: self.table.expired_evictions.load(Ordering::Relaxed),
        }
    }

    /// Signal the sweeper to stop. Entries keep expiring lazily on read.
    pub fn stop(&self) {
        if let Some(sweeper) = &self.sweeper {
            sweeper.stop();
        }
    }

    /// Stop the sweeper and wait for its task to finish
    pub async fn shutdown(&self) {
        if let Some(sweeper) = &self.sweeper {
            sweeper.shutdown().await;
        }
    }

    /// Whether a background sweeper is currently running for this store
    pub fn is_sweeping(&self) -> bool {
        self.sweeper.as_ref().is_some_and(|s| s.is_running())
    }

    /// Get current configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use std::time::Duration;
    use tokio::time::sleep;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Product {
        sku: String,
        price: i64,
    }

    fn lazy_store() -> CacheStore {
        CacheStore::new(CacheConfig::default().without_sweeper())
    }

    fn sweeping_store(interval_ms: u64) -> CacheStore {
        CacheStore::new(CacheConfig::default().with_sweep_interval(Duration::from_millis(interval_ms)))
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = lazy_store();
        let product = Product {
            sku: "A-1".to_string(),
            price: 1200,
        };

        assert!(store.set("product:A-1", &product, Ttl::secs(60)).is_stored());
        assert_eq!(store.get::<Product>("product:A-1"), Some(product));
        assert_eq!(store.get::<Product>("product:missing"), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_unconditionally() {
        let store = lazy_store();
        assert!(store.set("k", "first", Ttl::Never).is_stored());
        assert!(store.set("k", "second", Ttl::secs(60)).is_stored());
        assert_eq!(store.get::<String>("k").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_stored_value_is_a_copy() {
        let store = lazy_store();
        let mut tags = vec!["a".to_string()];
        assert!(store.set("tags", &tags, Ttl::Never).is_stored());

        tags.push("b".to_string());
        let mut read: Vec<String> = store.get("tags").unwrap();
        read.push("c".to_string());

        assert_eq!(store.get::<Vec<String>>("tags"), Some(vec!["a".to_string()]));
    }

    #[tokio::test]
    async fn test_lazy_expiry_on_read_removes_entry() {
        let store = lazy_store();
        assert!(store.set("short", &1, Ttl::millis(30)).is_stored());
        assert_eq!(store.get::<i32>("short"), Some(1));

        sleep(Duration::from_millis(60)).await;

        // Still physically present without a sweeper
        assert_eq!(store.len(), 1);
        assert_eq!(store.live_len(), 0);
        assert!(!store.contains("short"));

        assert_eq!(store.get::<i32>("short"), None);
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expired_evictions, 1);
    }

    #[tokio::test]
    async fn test_sweeper_reclaims_unread_entries() {
        let store = sweeping_store(10);
        assert!(store.set("unread", "v", Ttl::millis(30)).is_stored());
        assert!(store.set("forever", "v", Ttl::Never).is_stored());

        sleep(Duration::from_millis(200)).await;

        assert_eq!(store.len(), 1);
        assert!(store.contains("forever"));
        assert_eq!(store.stats().expired_evictions, 1);
    }

    #[tokio::test]
    async fn test_negative_ttl_never_expires() {
        let store = sweeping_store(10);
        assert!(store.set("legacy", "v", -1i64).is_stored());
        assert!(store.set("zero", "v", 0i64).is_stored());

        sleep(Duration::from_millis(100)).await;

        assert_eq!(store.get::<String>("legacy").as_deref(), Some("v"));
        assert_eq!(store.get::<String>("zero").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_extend_expiry_keeps_value_alive() {
        let store = lazy_store();
        assert!(store.set("session", "v", Ttl::millis(100)).is_stored());
        assert!(store.extend_expiry("session", Ttl::millis(400)).is_extended());

        sleep(Duration::from_millis(200)).await;

        assert_eq!(store.get::<String>("session").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_extend_expiry_to_never() {
        let store = lazy_store();
        assert!(store.set("k", "v", Ttl::millis(30)).is_stored());
        assert!(matches!(store.expiry_of("k"), Some(Expiry::At(_))));
        assert!(store.extend_expiry("k", Ttl::Never).is_extended());
        assert_eq!(store.expiry_of("k"), Some(Expiry::Never));

        sleep(Duration::from_millis(60)).await;

        assert!(store.contains("k"));
    }

    #[tokio::test]
    async fn test_extend_expiry_missing_or_dead_key() {
        let store = lazy_store();
        assert!(matches!(
            store.extend_expiry("missing", Ttl::secs(10)),
            ExtendOutcome::NotFound
        ));
        assert!(store.is_empty());

        assert!(store.set("dead", "v", Ttl::millis(10)).is_stored());
        sleep(Duration::from_millis(40)).await;
        assert!(matches!(
            store.extend_expiry("dead", Ttl::secs(10)),
            ExtendOutcome::NotFound
        ));
        assert_eq!(store.get::<String>("dead"), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = lazy_store();
        assert!(store.set("k", "v", Ttl::Never).is_stored());

        assert!(matches!(store.delete("k"), DeleteOutcome::Deleted));
        assert!(matches!(store.delete("k"), DeleteOutcome::NotFound));
        assert!(matches!(store.delete("never-set"), DeleteOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_delete_ignores_expiry_state() {
        let store = lazy_store();
        assert!(store.set("dead", "v", Ttl::millis(10)).is_stored());
        sleep(Duration::from_millis(40)).await;
        assert!(store.delete("dead").is_deleted());
    }

    #[tokio::test]
    async fn test_unencodable_value_is_a_failure() {
        let store = lazy_store();
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "non-string key");

        let outcome = store.set("bad", &bad, Ttl::Never);
        assert!(matches!(
            outcome,
            SetOutcome::Failed(CacheError::SerializationError(_))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_type_read_is_a_miss() {
        let store = lazy_store();
        assert!(store.set("n", &7, Ttl::Never).is_stored());

        assert!(store.try_get::<Product>("n").is_err());
        assert_eq!(store.get::<Product>("n"), None);
        // The entry itself is untouched
        assert_eq!(store.get::<i32>("n"), Some(7));
    }

    #[tokio::test]
    async fn test_set_default_uses_configured_ttl() {
        let store = CacheStore::new(
            CacheConfig::default()
                .without_sweeper()
                .with_default_ttl(-1),
        );
        assert!(store.set_default("k", "v").is_stored());
        assert!(store.contains("k"));
        assert_eq!(store.config().default_ttl_seconds, -1);
    }

    #[tokio::test]
    async fn test_purge_and_clear() {
        let store = lazy_store();
        assert!(store.set("a", "v", Ttl::millis(10)).is_stored());
        assert!(store.set("b", "v", Ttl::millis(10)).is_stored());
        assert!(store.set("c", "v", Ttl::Never).is_stored());

        sleep(Duration::from_millis(40)).await;

        assert_eq!(store.purge_expired().unwrap(), 2);
        assert_eq!(store.purge_expired().unwrap(), 0);
        assert_eq!(store.clear().unwrap(), 1);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_stats() {
        let store = lazy_store();
        assert!(store.set("dead", "v", Ttl::millis(10)).is_stored());
        assert!(store.set("live", "v", Ttl::secs(60)).is_stored());
        sleep(Duration::from_millis(40)).await;

        assert_eq!(
            store.stats(),
            CacheStats {
                entries: 2,
                live_entries: 1,
                expired_evictions: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = lazy_store();
        let other = store.clone();
        assert!(store.set("k", "v", Ttl::Never).is_stored());
        assert_eq!(other.get::<String>("k").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_shutdown_stops_sweeping() {
        let store = sweeping_store(10);
        assert!(store.is_sweeping());

        store.shutdown().await;
        assert!(!store.is_sweeping());

        assert!(store.set("k", "v", Ttl::millis(10)).is_stored());
        sleep(Duration::from_millis(80)).await;

        // Nobody swept it, but reads still honour expiry
        assert_eq!(store.len(), 1);
        assert_eq!(store.get::<String>("k"), None);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_without_runtime_is_lazy() {
        let store = CacheStore::new(CacheConfig::default());
        assert!(!store.is_sweeping());
        assert!(store.set("k", "v", Ttl::Never).is_stored());
        assert_eq!(store.get::<String>("k").as_deref(), Some("v"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sets_during_sweeps() {
        const N: usize = 200;
        let store = sweeping_store(1);

        let mut handles = Vec::with_capacity(N * 2);
        for i in 0..N {
            let live = store.clone();
            handles.push(tokio::spawn(async move {
                live.set(format!("live-{}", i), &i, Ttl::secs(60)).is_stored()
            }));

            let short = store.clone();
            handles.push(tokio::spawn(async move {
                short.set(format!("short-{}", i), &i, Ttl::millis(1)).is_stored()
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap());
        }

        sleep(Duration::from_millis(20)).await;
        assert_eq!(store.live_len(), N);

        sleep(Duration::from_millis(100)).await;

        assert_eq!(store.len(), N);
        for i in 0..N {
            assert_eq!(store.get::<usize>(&format!("live-{}", i)), Some(i));
        }
    }

    fn poison(store: &CacheStore) {
        let table = store.table.clone();
        let writer = std::thread::spawn(move || {
            let _entries = table.entries.write().unwrap();
            panic!("writer died holding the cache lock");
        });

        assert!(writer.join().is_err());
        assert!(store.table.entries.is_poisoned());
    }

    #[tokio::test]
    async fn test_poisoned_lock_fails_once_then_recovers() {
        let store = lazy_store();
        assert!(store.set("k", "v", Ttl::Never).is_stored());

        poison(&store);
        let outcome = store.set("k", "other", Ttl::Never);
        assert_eq!(outcome.code(), -1);
        assert!(matches!(outcome, SetOutcome::Failed(CacheError::LockPoisoned("set"))));
        assert_eq!(store.get::<String>("k").as_deref(), Some("v"));

        poison(&store);
        let outcome = store.extend_expiry("k", Ttl::secs(60));
        assert_eq!(outcome.code(), -1);
        assert!(matches!(
            outcome,
            ExtendOutcome::Failed(CacheError::LockPoisoned("extend_expiry"))
        ));
        assert_eq!(store.expiry_of("k"), Some(Expiry::Never));

        poison(&store);
        let outcome = store.delete("k");
        assert_eq!(outcome.code(), -1);
        assert!(matches!(outcome, DeleteOutcome::Failed(CacheError::LockPoisoned("delete"))));

        assert!(!store.table.entries.is_poisoned());
        assert!(store.contains("k"));
        assert!(store.delete("k").is_deleted());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_sweeper_survives_poisoned_lock() {
        let store = sweeping_store(5);
        assert!(store.set("gone", "x", Ttl::millis(10)).is_stored());
        assert!(store.set("kept", "y", Ttl::Never).is_stored());

        poison(&store);
        sleep(Duration::from_millis(100)).await;

        assert!(store.is_sweeping());
        assert_eq!(store.table.keys_for_test(), vec!["kept".to_string()]);
        assert_eq!(store.stats().expired_evictions, 1);
        store.shutdown().await;
    }

    #[test]
    fn test_purge_keeps_entries_revived_after_scan() {
        let table = EntryTable::default();
        let now = now_millis();
        table.insert_for_test("k", CacheEntry::new(serde_json::json!(1), Ttl::millis(1), now - 10));

        let candidates = table.expired_keys(now).unwrap();
        assert_eq!(candidates, vec!["k".to_string()]);

        // A set lands between the scan and the removal
        table.insert_for_test("k", CacheEntry::new(serde_json::json!(2), Ttl::secs(60), now));

        assert_eq!(table.evict_expired(&candidates, now).unwrap(), 0);
        assert_eq!(table.keys_for_test(), vec!["k".to_string()]);
        assert_eq!(table.expired_evictions.load(Ordering::Relaxed), 0);
    }
}
