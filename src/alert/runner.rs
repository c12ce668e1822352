//! Timer-driven scan loop and its lifecycle handle.

use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::engine::AlertEngine;
use crate::store::TaskSnapshot;

/// Controls a running alert loop.
///
/// Dropping the handle aborts the loop; [`AlertHandle::stop`] ends it
/// cleanly and hands the engine back.
pub struct AlertHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<AlertEngine>>,
}

impl AlertHandle {
    /// Returns `true` while the loop is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the loop and returns the engine with its alerted set.
    ///
    /// # Errors
    ///
    /// Returns an error if the loop panicked or was aborted.
    pub async fn stop(mut self) -> Result<AlertEngine, String> {
        if let Some(stop) = self.stop.take() {
            // The loop may already have ended on its own.
            let _ = stop.send(());
        }
        let task = self.task.take().ok_or_else(|| "alert loop already stopped".to_string())?;
        task.await.map_err(|e| format!("Alert loop failed: {e}"))
    }
}

impl Drop for AlertHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl AlertEngine {
    /// Starts scanning `snapshots` on a timer.
    ///
    /// Requests notification permission if undecided, scans immediately,
    /// then every `poll_interval`, and again whenever a new snapshot is
    /// published. The loop ends when stopped or when the store publishing
    /// the snapshots is dropped. Must be called within a tokio runtime.
    #[must_use]
    pub fn start(self, snapshots: watch::Receiver<TaskSnapshot>) -> AlertHandle {
        let permission = self.ensure_permission();
        tracing::debug!(
            %permission,
            lookahead_minutes = self.config.lookahead.num_minutes(),
            poll_secs = self.config.poll_interval.as_secs(),
            "starting deadline alerts"
        );
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(snapshots, stop_rx));
        AlertHandle { stop: Some(stop_tx), task: Some(task) }
    }

    async fn run(
        mut self,
        mut snapshots: watch::Receiver<TaskSnapshot>,
        mut stop: oneshot::Receiver<()>,
    ) -> AlertEngine {
        // interval() panics on a zero period.
        let period = self.config.poll_interval.max(std::time::Duration::from_millis(1));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut stop => {
                    tracing::debug!("deadline alerts stopped");
                    break;
                }
                _ = ticker.tick() => self.scan_latest(&mut snapshots),
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        tracing::debug!("task store closed; deadline alerts stopped");
                        break;
                    }
                    self.scan_latest(&mut snapshots);
                }
            }
        }
        self
    }

    fn scan_latest(&mut self, snapshots: &mut watch::Receiver<TaskSnapshot>) {
        let tasks = Arc::clone(&snapshots.borrow_and_update().tasks);
        self.scan(&tasks);
    }
}
