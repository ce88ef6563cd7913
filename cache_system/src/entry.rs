//! Cache entries and expiry arithmetic
//!
//! Expiry is a sum type rather than a `-1` sentinel. Legacy callers that pass
//! signed TTLs go through `Ttl::from(i64)`, where anything `<= 0` never expires.

use chrono::Utc;
use serde_json::Value;
use std::time::Duration;

/// Current wall-clock time in milliseconds since the Unix epoch (UTC)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Requested lifetime for a cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Entry stays until deleted or overwritten
    Never,
    /// Entry dies once this much time has passed since it was written
    After(Duration),
}

impl Ttl {
    pub fn secs(seconds: u64) -> Self {
        Self::from(Duration::from_secs(seconds))
    }

    pub fn millis(millis: u64) -> Self {
        Self::from(Duration::from_millis(millis))
    }

    /// Absolute expiry for an entry written at `now` (milliseconds)
    pub fn expiry_from(self, now: i64) -> Expiry {
        match self {
            Ttl::Never => Expiry::Never,
            Ttl::After(duration) => {
                let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
                Expiry::At(now.saturating_add(millis))
            }
        }
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Ttl::Never
        } else {
            Ttl::After(duration)
        }
    }
}

/// Signed seconds, `<= 0` meaning never expire
impl From<i64> for Ttl {
    fn from(seconds: i64) -> Self {
        if seconds <= 0 {
            Ttl::Never
        } else {
            Ttl::After(Duration::from_secs(seconds as u64))
        }
    }
}

/// Absolute expiry instant of a stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Never,
    /// Milliseconds since the Unix epoch
    At(i64),
}

impl Expiry {
    /// An entry is dead from its expiry instant onwards.
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self {
            Expiry::Never => false,
            Expiry::At(at) => *at <= now,
        }
    }

    /// Legacy representation: `-1` for never, otherwise the millisecond timestamp
    pub fn as_millis(&self) -> i64 {
        match self {
            Expiry::Never => -1,
            Expiry::At(at) => *at,
        }
    }
}

/// A stored value together with its expiry
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub expiry: Expiry,
}

impl CacheEntry {
    pub fn new(value: Value, ttl: Ttl, now: i64) -> Self {
        Self {
            value,
            expiry: ttl.expiry_from(now),
        }
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expiry.is_expired_at(now)
    }
}
