//! Deadline parsing and display helpers.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

use super::model::Task;

/// How close a task is to its deadline, for display markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    /// No deadline, or more than a day away.
    Later,
    /// Deadline less than 24 hours away (or passed, for completed tasks).
    DueSoon,
    /// Deadline passed and the task is still pending.
    Overdue,
}

impl DeadlineState {
    /// Classifies `task` relative to `now`.
    #[must_use]
    pub fn of(task: &Task, now: DateTime<Utc>) -> Self {
        match task.deadline {
            Some(deadline) if deadline < now && !task.completed => Self::Overdue,
            Some(deadline) if deadline < now + Duration::hours(24) => Self::DueSoon,
            _ => Self::Later,
        }
    }
}

/// Parses a deadline typed on the command line.
///
/// Accepts RFC 3339, local `YYYY-MM-DD HH:MM` (or with `T`, optional
/// seconds), and offsets from `now` such as `+30m`, `+2h`, `+1d`.
///
/// # Errors
///
/// Returns an error message if the input matches none of those forms.
pub fn parse_deadline(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
    let input = input.trim();
    if let Some(offset) = input.strip_prefix('+') {
        return now
            .checked_add_signed(parse_offset(offset)?)
            .ok_or_else(|| format!("deadline offset '{input}' is out of range"));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            format!("invalid deadline '{input}' (use RFC 3339, 'YYYY-MM-DD HH:MM', or '+30m'/'+2h'/'+1d')")
        })
}

fn parse_offset(offset: &str) -> Result<Duration, String> {
    let Some(unit) = offset.chars().last() else {
        return Err("empty deadline offset '+'".to_string());
    };
    let amount: i64 = offset[..offset.len() - unit.len_utf8()]
        .parse()
        .map_err(|_| format!("invalid deadline offset '+{offset}'"))?;
    let duration = match unit {
        'm' => Duration::try_minutes(amount),
        'h' => Duration::try_hours(amount),
        'd' => Duration::try_days(amount),
        _ => return Err(format!("invalid deadline offset '+{offset}' (unit must be m, h or d)")),
    };
    duration.ok_or_else(|| format!("deadline offset '+{offset}' is out of range"))
}

/// Describes `deadline` relative to `now`, e.g. `in 3 hours` or `5 minutes ago`.
#[must_use]
pub fn format_distance(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (deadline - now).num_milliseconds();
    let diff_mins = diff_ms.div_euclid(60_000);

    if diff_mins < 0 {
        let mins = diff_mins.abs();
        if mins < 60 {
            return format!("{} ago", plural(mins, "minute"));
        }
        let hours = mins / 60;
        if hours < 24 {
            return format!("{} ago", plural(hours, "hour"));
        }
        return format!("{} ago", plural(mins / 1440, "day"));
    }

    if diff_mins < 60 {
        return format!("in {}", plural(diff_mins, "minute"));
    }
    let hours = diff_ms.div_euclid(3_600_000);
    if hours < 24 {
        return format!("in {}", plural(hours, "hour"));
    }
    format!("in {}", plural(diff_ms.div_euclid(86_400_000), "day"))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T10:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn parses_relative_offsets() {
        assert_eq!(parse_deadline("+45m", now()).unwrap(), now() + Duration::minutes(45));
        assert_eq!(parse_deadline("+2h", now()).unwrap(), now() + Duration::hours(2));
        assert_eq!(parse_deadline("+1d", now()).unwrap(), now() + Duration::days(1));
        assert!(parse_deadline("+5w", now()).is_err());
        assert!(parse_deadline("+m", now()).is_err());
        assert!(parse_deadline("+", now()).is_err());
        assert!(parse_deadline("+5é", now()).is_err());
    }

    #[test]
    fn parses_absolute_forms() {
        let utc = parse_deadline("2024-06-15T12:00:00Z", now()).unwrap();
        assert_eq!(utc, now() + Duration::hours(2));
        assert!(parse_deadline("2024-06-15 12:00", now()).is_ok());
        assert!(parse_deadline("2024-06-15T12:00", now()).is_ok());
        assert!(parse_deadline("tomorrow", now()).is_err());
    }

    #[test]
    fn formats_future_distances() {
        assert_eq!(format_distance(now() + Duration::minutes(1), now()), "in 1 minute");
        assert_eq!(format_distance(now() + Duration::minutes(45), now()), "in 45 minutes");
        assert_eq!(format_distance(now() + Duration::hours(3), now()), "in 3 hours");
        assert_eq!(format_distance(now() + Duration::days(2), now()), "in 2 days");
    }

    #[test]
    fn formats_past_distances() {
        assert_eq!(format_distance(now() - Duration::seconds(30), now()), "1 minute ago");
        assert_eq!(format_distance(now() - Duration::minutes(5), now()), "5 minutes ago");
        assert_eq!(format_distance(now() - Duration::hours(1), now()), "1 hour ago");
        assert_eq!(format_distance(now() - Duration::days(3), now()), "3 days ago");
    }

    #[test]
    fn classifies_deadline_state() {
        let mut task = crate::task::Task {
            id: "1".into(),
            title: "x".into(),
            description: String::new(),
            deadline: Some(now() - Duration::minutes(1)),
            priority: Priority::Low,
            tags: Vec::new(),
            completed: false,
        };
        assert_eq!(DeadlineState::of(&task, now()), DeadlineState::Overdue);
        task.completed = true;
        assert_eq!(DeadlineState::of(&task, now()), DeadlineState::DueSoon);
        task.deadline = Some(now() + Duration::days(2));
        assert_eq!(DeadlineState::of(&task, now()), DeadlineState::Later);
        task.deadline = Some(now() + Duration::hours(5));
        assert_eq!(DeadlineState::of(&task, now()), DeadlineState::DueSoon);
        task.deadline = None;
        assert_eq!(DeadlineState::of(&task, now()), DeadlineState::Later);
    }
}
