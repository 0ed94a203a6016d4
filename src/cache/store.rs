//! Cache Store Module
//!
//! The unsynchronized map behind `ExpiringCache`. All locking happens one level
//! up; methods here assume the caller already holds the right guard.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::error::{PokedexError, Result};

// == Cache Store ==
/// Locator-keyed response storage with hit/miss accounting.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Locator to entry
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry and its timestamp.
    ///
    /// Fails with `StorageFault` only when the map cannot grow.
    pub fn put(&mut self, key: String, value: impl Into<Arc<[u8]>>) -> Result<()> {
        if !self.entries.contains_key(&key) {
            self.entries
                .try_reserve(1)
                .map_err(|e| PokedexError::StorageFault(e.to_string()))?;
        }

        self.entries.insert(key, CacheEntry::new(value));
        Ok(())
    }

    // == Get ==
    /// Returns the stored bytes for `key`, or `None` on a miss.
    ///
    /// Staleness is not checked here: an entry stays readable until a sweep
    /// removes it.
    pub fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(Arc::clone(&entry.value))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry whose age at `now` is at least `interval`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant, interval: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        removed
    }

    // == Contains ==
    /// Checks for a key without touching the hit/miss counters.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }
}
