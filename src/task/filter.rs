//! Visibility filtering over the task list.

use std::fmt;
use std::str::FromStr;

use super::model::{Priority, Task};

/// Completion-status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Completed tasks only.
    Completed,
    /// Tasks not yet completed.
    Pending,
}

impl StatusFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        })
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => Err(format!("unknown status '{other}' (expected all, completed or pending)")),
        }
    }
}

/// Priority filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    /// Any priority.
    #[default]
    All,
    /// Exactly this priority.
    Only(Priority),
}

impl PriorityFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == priority,
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(priority) => priority.fmt(f),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Priority>()
            .map(Self::Only)
            .map_err(|_| format!("unknown priority '{}' (expected all, low, medium or high)", s.trim()))
    }
}

/// Tag, status, and priority selection applied to the task list.
///
/// Tags use OR semantics: a task passes if it carries any selected tag.
/// An empty tag selection passes everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    /// Selected tags.
    pub tags: Vec<String>,
    /// Status selection.
    pub status: StatusFilter,
    /// Priority selection.
    pub priority: PriorityFilter,
}

impl TaskFilter {
    /// Selects `tag` if it is not selected, otherwise deselects it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Returns the filter with the given status selection.
    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Returns the filter with the given priority selection.
    #[must_use]
    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns `true` if `task` passes every part of the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let tags_ok = self.tags.is_empty() || self.tags.iter().any(|tag| task.has_tag(tag));
        tags_ok && self.status.matches(task) && self.priority.matches(task)
    }
}

/// Returns the tasks passing `filter`, in their original order.
#[must_use]
pub fn visible<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, priority: Priority, tags: &[&str], completed: bool) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            deadline: None,
            priority,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            completed,
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task("a", Priority::High, &["finance"], false),
            task("b", Priority::Low, &["home"], true),
            task("c", Priority::Medium, &["home", "finance"], false),
            task("d", Priority::High, &[], true),
        ]
    }

    #[test]
    fn default_filter_shows_everything_in_order() {
        let tasks = sample();
        assert_eq!(ids(&visible(&tasks, &TaskFilter::default())), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn tags_use_or_semantics() {
        let tasks = sample();
        let mut filter = TaskFilter::default();
        filter.toggle_tag("finance");
        filter.toggle_tag("home");
        assert_eq!(ids(&visible(&tasks, &filter)), vec!["a", "b", "c"]);
    }

    #[test]
    fn toggle_tag_twice_deselects() {
        let mut filter = TaskFilter::default();
        filter.toggle_tag("home");
        filter.toggle_tag("home");
        assert!(filter.tags.is_empty());
    }

    #[test]
    fn status_and_priority_combine() {
        let tasks = sample();
        let filter = TaskFilter::default()
            .with_status(StatusFilter::Completed)
            .with_priority(PriorityFilter::Only(Priority::High));
        assert_eq!(ids(&visible(&tasks, &filter)), vec!["d"]);

        let pending = TaskFilter::default().with_status(StatusFilter::Pending);
        assert_eq!(ids(&visible(&tasks, &pending)), vec!["a", "c"]);
    }

    #[test]
    fn parses_filter_values() {
        assert_eq!("pending".parse::<StatusFilter>(), Ok(StatusFilter::Pending));
        assert_eq!("ALL".parse::<PriorityFilter>(), Ok(PriorityFilter::All));
        assert_eq!("high".parse::<PriorityFilter>(), Ok(PriorityFilter::Only(Priority::High)));
        assert!("urgent".parse::<PriorityFilter>().is_err());
        assert!("someday".parse::<StatusFilter>().is_err());
        assert!("done".parse::<StatusFilter>().is_err());
    }
}
