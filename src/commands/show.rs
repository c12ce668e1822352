//! `taskbell show` command.

use chrono::Local;

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::{format_distance, Task};

/// Execute the `show` command.
///
/// Pretty-prints every field of one task.
///
/// # Errors
///
/// Returns an error string if no task has the given ID.
pub fn run(ctx: &ServiceContext, id: &str) -> Result<(), String> {
    let store = TaskStore::open(ctx);
    let task = store.get(id).ok_or_else(|| format!("No task with id {id}"))?;
    print!("{}", describe(task, ctx));
    Ok(())
}

fn describe(task: &Task, ctx: &ServiceContext) -> String {
    let mut out = format!("Task: {}\nTitle: {}\n", task.id, task.title);
    if !task.description.is_empty() {
        out.push_str(&format!("Description: {}\n", task.description));
    }
    out.push_str(&format!("Priority: {}\n", task.priority));
    if let Some(deadline) = task.deadline {
        out.push_str(&format!(
            "Deadline: {} ({})\n",
            deadline.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            format_distance(deadline, ctx.clock.now())
        ));
    }
    if !task.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", task.tags.join(", ")));
    }
    out.push_str(&format!("Status: {}\n", if task.completed { "completed" } else { "pending" }));
    out
}
