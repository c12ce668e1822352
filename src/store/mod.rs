//! Task store: the authoritative in-memory task list.
//!
//! The list is loaded once from the key-value port and written back in full
//! after every effective mutation, before the mutating call returns. Each
//! mutation also recomputes the tag universe and publishes a fresh
//! [`TaskSnapshot`] to subscribers:
//!
//! ```text
//! add/remove/toggle ─▶ persist ─▶ tag universe ─▶ watch channel ─▶ alert loop, UI
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;

use crate::context::ServiceContext;
use crate::ports::{IdGenerator, KeyValueStore};
use crate::task::{self, Task, TaskDraft, TaskFilter};

/// Key under which the snapshot is stored.
pub const TASKS_KEY: &str = "tasks";

/// What changed to produce a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Initial state after loading.
    Loaded,
    /// A task was appended.
    Added(String),
    /// One or more tasks were removed.
    Removed(Vec<String>),
    /// A task's completion flag flipped.
    Toggled {
        /// The task that changed.
        id: String,
        /// Its new completion state.
        completed: bool,
    },
}

/// Published view of the store after a change.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    /// Increments with every published change.
    pub revision: u64,
    /// The change that produced this snapshot.
    pub event: StoreEvent,
    /// All tasks, in display order.
    pub tasks: Arc<[Task]>,
    /// Distinct tags across `tasks`.
    pub tags: Arc<[String]>,
}

/// Owns the task list and keeps the persisted snapshot in step with it.
pub struct TaskStore {
    kv: Arc<dyn KeyValueStore>,
    id_gen: Arc<dyn IdGenerator>,
    tasks: Vec<Task>,
    tags: Vec<String>,
    revision: u64,
    persist_warning: Option<String>,
    changes: watch::Sender<TaskSnapshot>,
}

impl TaskStore {
    /// Loads the persisted tasks and opens a store over them.
    #[must_use]
    pub fn open(ctx: &ServiceContext) -> Self {
        let tasks = Self::load(ctx.kv.as_ref());
        let tags = task::tag_universe(&tasks);
        let initial = TaskSnapshot {
            revision: 0,
            event: StoreEvent::Loaded,
            tasks: tasks.clone().into(),
            tags: tags.clone().into(),
        };
        let (changes, _) = watch::channel(initial);
        tracing::debug!(count = tasks.len(), "task store opened");

        Self {
            kv: Arc::clone(&ctx.kv),
            id_gen: Arc::clone(&ctx.id_gen),
            tasks,
            tags,
            revision: 0,
            persist_warning: None,
            changes,
        }
    }

    /// Reads the persisted snapshot.
    ///
    /// Absent data yields an empty list. Unreadable or malformed data is
    /// logged and also yields an empty list; it never reaches the caller as
    /// an error.
    #[must_use]
    pub fn load(kv: &dyn KeyValueStore) -> Vec<Task> {
        read_saved(kv).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "starting with an empty task list");
            Vec::new()
        })
    }

    /// Re-reads the persisted snapshot and adopts it if it differs from the
    /// in-memory list, publishing a [`StoreEvent::Loaded`] snapshot.
    ///
    /// Returns `true` when the list changed. Unreadable or malformed data
    /// leaves the current list in place.
    pub fn reload(&mut self) -> bool {
        let saved = match read_saved(self.kv.as_ref()) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!(error = %e, "keeping current tasks");
                return false;
            }
        };
        if saved == self.tasks {
            return false;
        }
        tracing::debug!(before = self.tasks.len(), after = saved.len(), "saved tasks changed");
        self.tasks = saved;
        self.publish(StoreEvent::Loaded);
        true
    }

    /// Adds a task built from `draft` and returns it.
    ///
    /// The new task gets a fresh ID unused by any current task and goes to
    /// the end of the list.
    pub fn add(&mut self, draft: TaskDraft) -> Task {
        let id = self.fresh_id();
        let task = draft.into_task(id);
        self.tasks.push(task.clone());
        tracing::info!(id = %task.id, title = %task.title, "task added");
        self.commit(StoreEvent::Added(task.id.clone()));
        task
    }

    /// Removes the task with `id`. Returns `false` (and changes nothing) if
    /// there is no such task.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "remove ignored: no such task");
            return false;
        };
        self.tasks.remove(pos);
        tracing::info!(id, "task removed");
        self.commit(StoreEvent::Removed(vec![id.to_string()]));
        true
    }

    /// Removes every task whose ID is in `ids` and returns how many went.
    /// Unknown IDs are ignored.
    pub fn remove_many(&mut self, ids: &HashSet<String>) -> usize {
        let mut removed = Vec::new();
        self.tasks.retain(|t| {
            if ids.contains(&t.id) {
                removed.push(t.id.clone());
                false
            } else {
                true
            }
        });
        if removed.is_empty() {
            return 0;
        }
        let count = removed.len();
        tracing::info!(count, "tasks removed");
        self.commit(StoreEvent::Removed(removed));
        count
    }

    /// Flips the completion flag of `id` and returns the new value, or
    /// `None` if there is no such task.
    pub fn toggle_completion(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        tracing::info!(id, completed, "task completion toggled");
        self.commit(StoreEvent::Toggled { id: id.to_string(), completed });
        Some(completed)
    }

    /// Writes the full task list to the key-value port.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn persist(&self) -> Result<(), String> {
        let json = serde_json::to_string(&self.tasks)
            .map_err(|e| format!("Failed to serialize tasks: {e}"))?;
        self.kv.set(TASKS_KEY, &json).map_err(|e| format!("Failed to save tasks: {e}"))
    }

    /// All tasks, in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Distinct tags across all tasks, in first-seen order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tasks passing `filter`, in display order.
    #[must_use]
    pub fn visible(&self, filter: &TaskFilter) -> Vec<&Task> {
        task::visible(&self.tasks, filter)
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        self.changes.borrow().clone()
    }

    /// Subscribes to snapshots published after each change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.changes.subscribe()
    }

    /// Returns and clears the message from the last failed save, if any.
    pub fn take_persist_warning(&mut self) -> Option<String> {
        self.persist_warning.take()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = self.id_gen.generate_id();
            if self.get(&id).is_none() {
                return id;
            }
            tracing::debug!(id = %id, "generated id already in use; retrying");
        }
    }

    fn commit(&mut self, event: StoreEvent) {
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "tasks kept in memory only");
            self.persist_warning = Some(e);
        }
        self.publish(event);
    }

    fn publish(&mut self, event: StoreEvent) {
        self.tags = task::tag_universe(&self.tasks);
        self.revision += 1;
        self.changes.send_replace(TaskSnapshot {
            revision: self.revision,
            event,
            tasks: self.tasks.clone().into(),
            tags: self.tags.clone().into(),
        });
    }
}

/// Reads and parses the persisted snapshot. An absent key is an empty list.
fn read_saved(kv: &dyn KeyValueStore) -> Result<Vec<Task>, String> {
    let Some(raw) = kv.get(TASKS_KEY).map_err(|e| format!("Failed to read saved tasks: {e}"))?
    else {
        return Ok(Vec::new());
    };
    serde_json::from_str::<Vec<Task>>(&raw)
        .map(dedupe_ids)
        .map_err(|e| format!("Failed to parse saved tasks: {e}"))
}

/// Drops records whose ID repeats an earlier one.
fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let before = tasks.len();
    let tasks: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.id.clone())).collect();
    if tasks.len() != before {
        tracing::warn!(dropped = before - tasks.len(), "saved tasks contained duplicate ids");
    }
    tasks
}
