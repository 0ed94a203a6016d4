//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the client is up.
//!
//! # Tasks
//! - Cache reap: sweeps stale responses out of the cache every interval

mod reaper;

pub use reaper::{spawn_reap_task, ReaperHandle};
