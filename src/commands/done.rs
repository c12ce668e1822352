//! `taskbell done` command.

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `done` command.
///
/// Toggles completion, so running it twice returns the task to pending.
///
/// # Errors
///
/// Returns an error string if no task has the given ID.
pub fn run(ctx: &ServiceContext, id: &str) -> Result<(), String> {
    let mut store = TaskStore::open(ctx);
    let completed = store.toggle_completion(id).ok_or_else(|| format!("No task with id {id}"))?;
    super::report_persist_warning(&mut store);
    println!("Marked {id} as {}.", if completed { "completed" } else { "pending" });
    Ok(())
}
