//! Notifier that records what it would have shown.

use std::sync::Mutex;

use crate::ports::{NotificationPermission, Notifier, PortError};

/// Records shown notifications as `(title, body)` pairs.
pub struct RecordingNotifier {
    permission: Mutex<NotificationPermission>,
    on_request: NotificationPermission,
    shown: Mutex<Vec<(String, String)>>,
    requests: Mutex<usize>,
}

impl RecordingNotifier {
    /// Creates a notifier in `permission`; a pending request resolves to
    /// `on_request`.
    #[must_use]
    pub fn new(permission: NotificationPermission, on_request: NotificationPermission) -> Self {
        Self {
            permission: Mutex::new(permission),
            on_request,
            shown: Mutex::new(Vec::new()),
            requests: Mutex::new(0),
        }
    }

    /// Notifier with permission already granted.
    #[must_use]
    pub fn granted() -> Self {
        Self::new(NotificationPermission::Granted, NotificationPermission::Granted)
    }

    /// Notifications shown so far.
    #[must_use]
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Number of permission requests made.
    #[must_use]
    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn request_permission(&self) -> NotificationPermission {
        *self.requests.lock().unwrap_or_else(std::sync::PoisonError::into_inner) += 1;
        let mut permission =
            self.permission.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if *permission == NotificationPermission::Default {
            *permission = self.on_request;
        }
        *permission
    }

    fn show(&self, title: &str, body: &str) -> Result<(), PortError> {
        self.shown
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}
