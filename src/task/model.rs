//! Core task type and its snapshot encoding.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase name used in the snapshot and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority '{other}' (expected low, medium or high)")),
        }
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, unique within the store.
    pub id: String,
    /// Non-empty, trimmed title.
    pub title: String,
    /// Free-form description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Optional deadline.
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub deadline: Option<DateTime<Utc>>,
    /// Priority, `medium` unless chosen otherwise.
    #[serde(default)]
    pub priority: Priority,
    /// Tags in insertion order, without duplicates.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Returns `true` if the task carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Collects the distinct tags of `tasks` in first-seen order.
#[must_use]
pub fn tag_universe(tasks: &[Task]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in tasks.iter().flat_map(|t| t.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Accepts `null`, `""`, RFC 3339, or a naive local `YYYY-MM-DDTHH:MM[:SS]`.
///
/// Browser date-time inputs produce the naive form, and an empty string
/// means no deadline was chosen.
fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| Some(local.with_timezone(&Utc)))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid deadline '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_record_with_defaults() {
        let task: Task = serde_json::from_value(json!({"id": "1", "title": "Walk dog"})).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.deadline, None);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
        assert!(!task.completed);
    }

    #[test]
    fn empty_deadline_string_means_none() {
        let task: Task =
            serde_json::from_value(json!({"id": "1", "title": "x", "deadline": ""})).unwrap();
        assert_eq!(task.deadline, None);
    }

    #[test]
    fn decodes_rfc3339_and_naive_local_deadlines() {
        let task: Task = serde_json::from_value(
            json!({"id": "1", "title": "x", "deadline": "2024-06-15T10:30:00Z"}),
        )
        .unwrap();
        assert_eq!(task.deadline.unwrap().to_rfc3339(), "2024-06-15T10:30:00+00:00");

        let naive: Task = serde_json::from_value(
            json!({"id": "2", "title": "x", "deadline": "2024-06-15T10:30"}),
        )
        .unwrap();
        let expected = Local
            .from_local_datetime(
                &NaiveDateTime::parse_from_str("2024-06-15T10:30", "%Y-%m-%dT%H:%M").unwrap(),
            )
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(naive.deadline, Some(expected));
    }

    #[test]
    fn rejects_garbage_deadline() {
        let result: Result<Task, _> =
            serde_json::from_value(json!({"id": "1", "title": "x", "deadline": "soon"}));
        assert!(result.is_err());
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("high"));
        assert_eq!("LOW".parse::<Priority>(), Ok(Priority::Low));
    }

    #[test]
    fn tag_universe_keeps_first_seen_order() {
        let make = |id: &str, tags: &[&str]| Task {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            deadline: None,
            priority: Priority::Medium,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            completed: false,
        };
        let tasks = vec![make("a", &["work", "home"]), make("b", &["errand", "work"])];
        assert_eq!(tag_universe(&tasks), vec!["work", "home", "errand"]);
    }
}
