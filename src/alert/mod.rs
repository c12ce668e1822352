//! Deadline alerting.
//!
//! [`AlertEngine::scan`] is one evaluation tick: every pending task whose
//! deadline falls inside `(now, now + lookahead]` is alerted, once per
//! engine lifetime. [`AlertEngine::start`] runs ticks on a timer against the
//! store's published snapshots until the returned [`AlertHandle`] is stopped.
//!
//! A task whose deadline passes while no tick observed it inside the window
//! is never alerted.

mod engine;
mod message;
mod runner;

pub use engine::AlertEngine;
pub use message::{DeadlineAlert, NOTIFICATION_TITLE};
pub use runner::AlertHandle;

/// Alert timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    /// How far ahead of a deadline an alert may fire.
    pub lookahead: chrono::Duration,
    /// Time between scans.
    pub poll_interval: std::time::Duration,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            lookahead: chrono::Duration::hours(1),
            poll_interval: std::time::Duration::from_secs(60),
        }
    }
}
