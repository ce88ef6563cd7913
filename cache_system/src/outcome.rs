//! Results of cache mutations
//!
//! A miss is a normal outcome, not an error, and internal faults are reported
//! as `Failed` instead of being propagated. `code()` gives the legacy numeric
//! status: `1` success, `0` not found, `-1` failure.

use crate::errors::CacheError;

/// Outcome of [`CacheStore::set`](crate::CacheStore::set)
#[derive(Debug)]
#[must_use]
pub enum SetOutcome {
    Stored,
    Failed(CacheError),
}

/// Outcome of [`CacheStore::delete`](crate::CacheStore::delete)
#[derive(Debug)]
#[must_use]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed(CacheError),
}

/// Outcome of [`CacheStore::extend_expiry`](crate::CacheStore::extend_expiry)
#[derive(Debug)]
#[must_use]
pub enum ExtendOutcome {
    Extended,
    NotFound,
    Failed(CacheError),
}

impl SetOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, SetOutcome::Stored)
    }

    pub fn code(&self) -> i32 {
        match self {
            SetOutcome::Stored => 1,
            SetOutcome::Failed(_) => -1,
        }
    }

    /// Turn a failure back into an error for callers that cannot continue without the write
    pub fn into_result(self) -> Result<(), CacheError> {
        match self {
            SetOutcome::Stored => Ok(()),
            SetOutcome::Failed(err) => Err(err),
        }
    }
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }

    pub fn code(&self) -> i32 {
        match self {
            DeleteOutcome::Deleted => 1,
            DeleteOutcome::NotFound => 0,
            DeleteOutcome::Failed(_) => -1,
        }
    }
}

impl ExtendOutcome {
    pub fn is_extended(&self) -> bool {
        matches!(self, ExtendOutcome::Extended)
    }

    pub fn code(&self) -> i32 {
        match self {
            ExtendOutcome::Extended => 1,
            ExtendOutcome::NotFound => 0,
            ExtendOutcome::Failed(_) => -1,
        }
    }
}
