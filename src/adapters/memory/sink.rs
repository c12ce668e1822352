//! Alert sink that keeps every alert it receives.

use std::sync::Mutex;

use crate::alert::DeadlineAlert;
use crate::ports::AlertSink;

/// Collects delivered alerts in order.
#[derive(Default)]
pub struct CollectingSink {
    alerts: Mutex<Vec<DeadlineAlert>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts delivered so far.
    #[must_use]
    pub fn alerts(&self) -> Vec<DeadlineAlert> {
        self.alerts.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

impl AlertSink for CollectingSink {
    fn acknowledge(&self, alert: &DeadlineAlert) {
        self.alerts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(alert.clone());
    }
}
