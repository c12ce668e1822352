//! Deadline scan state and evaluation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::message::{DeadlineAlert, NOTIFICATION_TITLE};
use super::AlertConfig;
use crate::context::ServiceContext;
use crate::ports::{AlertSink, Clock, NotificationPermission, Notifier};
use crate::task::Task;

/// Raises at most one alert per task as its deadline approaches.
///
/// The alerted set lives only as long as the engine. Completing or deleting
/// a task does not clear its entry.
pub struct AlertEngine {
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn AlertSink>,
    pub(super) config: AlertConfig,
    alerted: HashSet<String>,
}

impl AlertEngine {
    /// Creates an engine using the context's clock, notifier, and sink.
    #[must_use]
    pub fn new(ctx: &ServiceContext, config: AlertConfig) -> Self {
        Self {
            clock: Arc::clone(&ctx.clock),
            notifier: Arc::clone(&ctx.notifier),
            sink: Arc::clone(&ctx.sink),
            config,
            alerted: HashSet::new(),
        }
    }

    /// Timing in effect.
    #[must_use]
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// IDs alerted so far.
    #[must_use]
    pub fn alerted(&self) -> &HashSet<String> {
        &self.alerted
    }

    /// Asks for notification permission if nothing has been decided yet.
    pub fn ensure_permission(&self) -> NotificationPermission {
        match self.notifier.permission() {
            NotificationPermission::Default => self.notifier.request_permission(),
            decided => decided,
        }
    }

    /// Runs one evaluation over `tasks` and returns the alerts raised.
    pub fn scan(&mut self, tasks: &[Task]) -> Vec<DeadlineAlert> {
        let now = self.clock.now();
        let horizon =
            now.checked_add_signed(self.config.lookahead).unwrap_or(DateTime::<Utc>::MAX_UTC);

        let due: Vec<DeadlineAlert> = tasks
            .iter()
            .filter(|task| !task.completed && !self.alerted.contains(&task.id))
            .filter_map(|task| {
                let deadline = task.deadline?;
                in_window(deadline, now, horizon).then(|| DeadlineAlert {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                    deadline,
                    raised_at: now,
                    window: self.config.lookahead,
                })
            })
            .collect();

        for alert in &due {
            self.raise(alert);
        }
        tracing::trace!(scanned = tasks.len(), raised = due.len(), "deadline scan finished");
        due
    }

    fn raise(&mut self, alert: &DeadlineAlert) {
        tracing::info!(task_id = %alert.task_id, deadline = %alert.deadline, "deadline alert");
        if self.notifier.permission() == NotificationPermission::Granted {
            if let Err(e) = self.notifier.show(NOTIFICATION_TITLE, &alert.notification_body()) {
                tracing::warn!(task_id = %alert.task_id, error = %e, "failed to show notification");
            }
        } else {
            tracing::debug!(task_id = %alert.task_id, "notifications unavailable; prompt only");
        }
        self.sink.acknowledge(alert);
        self.alerted.insert(alert.task_id.clone());
    }
}

fn in_window(deadline: DateTime<Utc>, now: DateTime<Utc>, horizon: DateTime<Utc>) -> bool {
    now < deadline && deadline <= horizon
}
