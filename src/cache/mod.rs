//! Cache Module
//!
//! Provides the in-memory response cache with interval-based expiry.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;
