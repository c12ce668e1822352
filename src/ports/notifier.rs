//! Notification port for platform-level alerts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Permission state of the platform notification capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    /// Notifications may be shown.
    Granted,
    /// The user refused notifications.
    Denied,
    /// Nothing decided yet; a request may still be made.
    #[default]
    Default,
}

impl fmt::Display for NotificationPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Default => "default",
        })
    }
}

impl FromStr for NotificationPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "default" => Ok(Self::Default),
            other => Err(format!(
                "unknown notification permission '{other}' (expected granted, denied or default)"
            )),
        }
    }
}

/// Optional platform capability for showing notifications.
///
/// Callers must degrade gracefully: when permission is anything other than
/// [`NotificationPermission::Granted`] nothing is shown.
pub trait Notifier: Send + Sync {
    /// Returns the current permission state.
    fn permission(&self) -> NotificationPermission;

    /// Asks the platform for permission and returns the resulting state.
    fn request_permission(&self) -> NotificationPermission;

    /// Shows a notification with the given title and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses or fails to display it.
    fn show(&self, title: &str, body: &str) -> Result<(), PortError>;
}
