//! Service context bundling all port trait objects.

use std::sync::Arc;

use crate::adapters::live::{
    ConsoleNotifier, FileKeyValueStore, LiveClock, LiveIdGenerator, LogSink, PromptSink,
};
use crate::adapters::memory::MemoryKeyValueStore;
use crate::config::Config;
use crate::ports::{AlertSink, Clock, IdGenerator, KeyValueStore, Notifier};

/// Bundles all port trait objects into a single context.
///
/// Ports sit behind `Arc` so the alert loop can hold its own handles
/// while the store keeps mutating on the caller's side.
#[derive(Clone)]
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Arc<dyn Clock>,
    /// ID generator for new tasks.
    pub id_gen: Arc<dyn IdGenerator>,
    /// Key-value storage for the task snapshot.
    pub kv: Arc<dyn KeyValueStore>,
    /// Platform notifications.
    pub notifier: Arc<dyn Notifier>,
    /// Where deadline alerts are delivered.
    pub sink: Arc<dyn AlertSink>,
}

impl ServiceContext {
    /// Creates a live context: system clock, UUIDs, file-backed storage in
    /// the configured store directory, terminal notifications, and the
    /// interactive acknowledgment prompt.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            clock: Arc::new(LiveClock),
            id_gen: Arc::new(LiveIdGenerator::new()),
            kv: Arc::new(FileKeyValueStore::new(&config.store_dir)),
            notifier: Arc::new(ConsoleNotifier::new(config.notifications)),
            sink: Arc::new(PromptSink::stdio()),
        }
    }

    /// Replaces file storage with an in-memory store that is discarded on exit.
    #[must_use]
    pub fn ephemeral(mut self) -> Self {
        self.kv = Arc::new(MemoryKeyValueStore::new());
        self
    }

    /// Replaces the interactive prompt with log-only alert delivery.
    #[must_use]
    pub fn without_prompt(mut self) -> Self {
        self.sink = Arc::new(LogSink);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NotificationPermission;

    #[test]
    fn live_context_uses_configured_store_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            store_dir: dir.path().to_path_buf(),
            alerts: crate::alert::AlertConfig::default(),
            notifications: NotificationPermission::Denied,
        };

        let ctx = ServiceContext::live(&config);
        ctx.kv.set("tasks", "[]").unwrap();

        assert!(dir.path().join("tasks.json").exists());
        assert_eq!(ctx.notifier.permission(), NotificationPermission::Denied);
    }

    #[test]
    fn ephemeral_context_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            store_dir: dir.path().join("store"),
            alerts: crate::alert::AlertConfig::default(),
            notifications: NotificationPermission::Default,
        };

        let ctx = ServiceContext::live(&config).ephemeral();
        ctx.kv.set("tasks", "[]").unwrap();

        assert_eq!(ctx.kv.get("tasks").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("store").exists());
    }
}
