//! Alert payload and its user-facing text.

use chrono::{DateTime, Duration, Local, Utc};

/// Title used for platform notifications.
pub const NOTIFICATION_TITLE: &str = "Task Deadline Approaching!";

/// A raised deadline alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineAlert {
    /// The alerted task.
    pub task_id: String,
    /// Its title at the time of the alert.
    pub title: String,
    /// Its deadline.
    pub deadline: DateTime<Utc>,
    /// When the alert was raised.
    pub raised_at: DateTime<Utc>,
    /// Lookahead window in effect.
    pub window: Duration,
}

impl DeadlineAlert {
    /// Notification body, e.g. `"Pay rent" is due in less than an hour`.
    #[must_use]
    pub fn notification_body(&self) -> String {
        format!("\"{}\" is due in less than {}", self.title, describe_window(self.window))
    }

    /// Text for the acknowledgment prompt.
    #[must_use]
    pub fn prompt_text(&self) -> String {
        format!(
            "⏰ Deadline Alert!\n\n\"{}\" is due soon!\n\nDeadline: {}",
            self.title,
            self.deadline.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        )
    }
}

fn describe_window(window: Duration) -> String {
    let minutes = window.num_minutes();
    match minutes {
        1 => "a minute".to_string(),
        60 => "an hour".to_string(),
        m if m > 0 && m % 60 == 0 => format!("{} hours", m / 60),
        m => format!("{m} minutes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(window: Duration) -> DeadlineAlert {
        let now = Utc::now();
        DeadlineAlert {
            task_id: "t1".into(),
            title: "Pay rent".into(),
            deadline: now + Duration::minutes(45),
            raised_at: now,
            window,
        }
    }

    #[test]
    fn body_names_task_and_window() {
        assert_eq!(
            alert(Duration::hours(1)).notification_body(),
            "\"Pay rent\" is due in less than an hour"
        );
        assert_eq!(
            alert(Duration::minutes(90)).notification_body(),
            "\"Pay rent\" is due in less than 90 minutes"
        );
        assert_eq!(
            alert(Duration::hours(3)).notification_body(),
            "\"Pay rent\" is due in less than 3 hours"
        );
    }

    #[test]
    fn prompt_mentions_deadline() {
        let text = alert(Duration::hours(1)).prompt_text();
        assert!(text.contains("\"Pay rent\" is due soon!"));
        assert!(text.contains("Deadline: "));
    }
}
