//! Live notifier writing terminal notifications to stderr.

use std::io::{IsTerminal, Write};
use std::sync::Mutex;

use crate::ports::{NotificationPermission, Notifier, PortError};

/// Terminal stand-in for the platform notification capability.
///
/// A pending permission request is granted only when stderr is attached
/// to a terminal; piped output gets no bell-and-banner noise.
pub struct ConsoleNotifier {
    permission: Mutex<NotificationPermission>,
}

impl ConsoleNotifier {
    /// Creates a notifier starting in the given permission state.
    #[must_use]
    pub fn new(permission: NotificationPermission) -> Self {
        Self { permission: Mutex::new(permission) }
    }
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn request_permission(&self) -> NotificationPermission {
        let mut permission =
            self.permission.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if *permission == NotificationPermission::Default {
            *permission = if std::io::stderr().is_terminal() {
                NotificationPermission::Granted
            } else {
                NotificationPermission::Denied
            };
            tracing::debug!(permission = %*permission, "notification permission resolved");
        }
        *permission
    }

    fn show(&self, title: &str, body: &str) -> Result<(), PortError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "\x07[{title}] {body}")?;
        stderr.flush()?;
        Ok(())
    }
}
