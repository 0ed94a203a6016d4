//! Cache Entry Module
//!
//! Defines the structure for individual cached responses.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body and the moment it was stored.
///
/// Entries are never mutated in place. Refreshing a key replaces the whole
/// entry, so a reader always sees a value together with its own timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response bytes
    pub value: Arc<[u8]>,
    /// When the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: impl Into<Arc<[u8]>>) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates a new entry with an explicit creation time.
    pub fn created_at(value: impl Into<Arc<[u8]>>, created_at: Instant) -> Self {
        Self {
            value: value.into(),
            created_at,
        }
    }

    // == Age ==
    /// Returns how old the entry is at `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether a sweep at `now` should remove the entry.
    ///
    /// Boundary condition: an entry whose age equals `interval` is stale.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) >= interval
    }
}
