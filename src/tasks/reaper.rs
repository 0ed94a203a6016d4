//! Cache Reap Task
//!
//! Background task that periodically sweeps stale entries out of the cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Owner of a running reap task.
///
/// Dropping the handle cancels the task, so the sweep stops once the last
/// cache handle goes away.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the task to stop after its current sweep, if any.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    /// Returns true once a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawns a background task that sweeps the cache every `interval`.
///
/// Each sweep takes the store's write lock and removes every entry whose age
/// is at least `interval`. Because this is a sweep rather than a per-entry
/// deadline, an entry survives anywhere from just under one interval to just
/// under two, depending on where its insert fell between sweeps.
///
/// The first sweep happens one full interval after the task starts.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let reaper = spawn_reap_task(store.clone(), Duration::from_secs(5));
/// // Later, during shutdown:
/// reaper.stop();
/// ```
pub fn spawn_reap_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> ReaperHandle {
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();

    let task = tokio::spawn(async move {
        info!(
            "Starting cache reap task with interval of {} ms",
            interval.as_millis()
        );

        let mut ticker = tokio::time::interval(interval);
        // Skip the first tick (fires immediately)
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Cache reap task stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.write().await;
                        guard.reap(Instant::now(), interval)
                    };

                    if removed > 0 {
                        info!("Cache reap: removed {} stale entries", removed);
                    } else {
                        debug!("Cache reap: no stale entries found");
                    }
                }
            }
        }
    });

    ReaperHandle { shutdown, task }
}
