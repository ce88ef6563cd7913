//! Background expiry sweeper
//!
//! A tokio task that wakes on a fixed interval and evicts every expired entry,
//! whether or not anyone reads it. It stops when signalled, when its owning
//! [`ExpirySweeper`] is dropped, or when the store's table is gone.

use crate::entry::now_millis;
use crate::store::EntryTable;
use crate::debug_log;
use std::sync::{Mutex, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running sweep task
#[derive(Debug)]
pub struct ExpirySweeper {
    stop_tx: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl ExpirySweeper {
    pub(crate) fn spawn(runtime: &Handle, table: Weak<EntryTable>, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = runtime.spawn(sweep_loop(table, interval, stop_rx));

        Self {
            stop_tx,
            handle: Mutex::new(Some(handle)),
            interval,
        }
    }

    /// Ask the task to exit at its next wake-up. Idempotent.
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    /// Stop and wait for the task to finish
    pub async fn shutdown(&self) {
        self.stop();

        let handle = self.handle.lock().ok().and_then(|mut slot| slot.take());
        if let Some(handle) = handle
            && let Err(err) = handle.await
        {
            tracing::warn!(error = %err, "Expiry sweeper task ended abnormally");
        }
    }

    pub fn is_running(&self) -> bool {
        if *self.stop_tx.borrow() {
            return false;
        }

        self.handle
            .lock()
            .map(|slot| slot.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for ExpirySweeper {
    fn drop(&mut self) {
        self.stop_tx.send_replace(true);
    }
}

async fn sweep_loop(table: Weak<EntryTable>, interval: Duration, mut stop_rx: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    debug_log!("Expiry sweeper started, interval={:?}", interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(table) = table.upgrade() else {
                    break;
                };

                match table.purge_expired(now_millis()) {
                    Ok(0) => {}
                    Ok(removed) => {
                        tracing::debug!(removed, "Expiry sweep reclaimed entries");
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Expiry sweep failed, retrying next tick");
                    }
                }
            }
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug_log!("Expiry sweeper stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{CacheEntry, Ttl};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let table = Arc::new(EntryTable::default());
        let sweeper = ExpirySweeper::spawn(
            &Handle::current(),
            Arc::downgrade(&table),
            Duration::from_millis(10),
        );
        assert!(sweeper.is_running());
        assert_eq!(sweeper.interval(), Duration::from_millis(10));

        sweeper.stop();
        sweeper.stop();
        assert!(!sweeper.is_running());

        sweeper.shutdown().await;
        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn test_exits_when_table_is_dropped() {
        let table = Arc::new(EntryTable::default());
        let sweeper = ExpirySweeper::spawn(
            &Handle::current(),
            Arc::downgrade(&table),
            Duration::from_millis(5),
        );

        drop(table);
        sleep(Duration::from_millis(50)).await;

        assert!(!sweeper.is_running());
    }

    #[tokio::test]
    async fn test_sweeps_table() {
        let table = Arc::new(EntryTable::default());
        table.insert_for_test("gone", CacheEntry::new(json!(1), Ttl::millis(10), now_millis()));
        table.insert_for_test("kept", CacheEntry::new(json!(2), Ttl::Never, now_millis()));

        let sweeper = ExpirySweeper::spawn(
            &Handle::current(),
            Arc::downgrade(&table),
            Duration::from_millis(5),
        );
        sleep(Duration::from_millis(100)).await;

        assert_eq!(table.keys_for_test(), vec!["kept".to_string()]);
        sweeper.shutdown().await;
    }
}
