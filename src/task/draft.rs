//! Validated input for creating a task.

use std::fmt;

use chrono::{DateTime, Utc};

use super::model::{Priority, Task};

/// Reasons a draft is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The title is empty or whitespace only.
    EmptyTitle,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("Please enter a task title"),
        }
    }
}

impl std::error::Error for DraftError {}

/// Everything a task needs except its ID.
///
/// Drafts are always pending; completion is only reachable by toggling a
/// stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    deadline: Option<DateTime<Utc>>,
    priority: Priority,
    tags: Vec<String>,
}

impl TaskDraft {
    /// Starts a draft with the given title, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyTitle`] if the title is blank.
    pub fn new(title: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: String::new(),
            deadline: None,
            priority: Priority::default(),
            tags: Vec::new(),
        })
    }

    /// Sets the description, trimmed.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Sets or clears the deadline.
    #[must_use]
    pub fn deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a tag. Blank tags and repeats are ignored.
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self
    }

    /// Adds several tags, in order.
    #[must_use]
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().fold(self, |draft, tag| draft.tag(tag.as_ref()))
    }

    /// The trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Turns the draft into a pending task with the given ID.
    pub(crate) fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            priority: self.priority,
            tags: self.tags,
            completed: false,
        }
    }
}
