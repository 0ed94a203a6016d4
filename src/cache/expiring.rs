//! Expiring Cache Module
//!
//! Concurrency-safe response cache with a background reaper. This is the only
//! handle callers use; the lock and the reap task both live inside it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{CacheStore, StatsSnapshot};
use crate::error::Result;
use crate::tasks::{spawn_reap_task, ReaperHandle};

/// Smallest reap interval accepted; tokio intervals cannot tick at zero.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

// == Expiring Cache ==
/// Locator-keyed byte cache whose entries are swept after `interval`.
///
/// Reads share a read lock, so concurrent lookups never wait on each other.
/// Inserts and the reaper take the write lock. A reader sees either a whole
/// entry or none.
///
/// Cloning is cheap and every clone shares the same store. The reaper stops
/// when `shutdown` is called or when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    reaper: Arc<ReaperHandle>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper right away.
    ///
    /// Must be called from within a tokio runtime. A zero interval is raised
    /// to one millisecond.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), interval);

        Self {
            store,
            interval,
            reaper: Arc::new(reaper),
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Arc<[u8]>>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.into(), value)
    }

    // == Get ==
    /// Returns the bytes stored under `key`, or `None` if absent or reaped.
    pub async fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Shutdown ==
    /// Stops the reaper. Stored entries stay readable but no longer expire.
    pub fn shutdown(&self) {
        if self.reaper.is_stopped() {
            return;
        }
        info!("Stopping cache reaper");
        self.reaper.stop();
    }

    /// Returns true once the reaper task has exited.
    pub fn is_reaper_finished(&self) -> bool {
        self.reaper.is_finished()
    }

    /// The reap period, which is also the staleness threshold.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }
}
