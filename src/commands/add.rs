//! `taskbell add` command.

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::{parse_deadline, Priority, Task, TaskDraft};

/// Execute the `add` command.
///
/// Validates the input, appends the task, and prints its ID.
///
/// # Errors
///
/// Returns an error string if the title is blank or the deadline is invalid.
pub fn run(
    ctx: &ServiceContext,
    title: &str,
    description: &str,
    deadline: Option<&str>,
    priority: Priority,
    tags: &[String],
) -> Result<(), String> {
    let task = add(ctx, title, description, deadline, priority, tags)?;
    println!("Added task {}: {}", task.id, task.title);
    Ok(())
}

fn add(
    ctx: &ServiceContext,
    title: &str,
    description: &str,
    deadline: Option<&str>,
    priority: Priority,
    tags: &[String],
) -> Result<Task, String> {
    let deadline = deadline.map(|raw| parse_deadline(raw, ctx.clock.now())).transpose()?;
    let draft = TaskDraft::new(title)
        .map_err(|e| e.to_string())?
        .description(description)
        .deadline(deadline)
        .priority(priority)
        .tags(tags);

    let mut store = TaskStore::open(ctx);
    let task = store.add(draft);
    super::report_persist_warning(&mut store);
    Ok(task)
}
