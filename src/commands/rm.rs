//! `taskbell rm` command.

use std::collections::HashSet;

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `rm` command.
///
/// One ID removes that task; several remove them as a batch.
///
/// # Errors
///
/// Returns an error string if none of the IDs matched a task.
pub fn run(ctx: &ServiceContext, ids: &[String]) -> Result<(), String> {
    let mut store = TaskStore::open(ctx);
    let removed = match ids {
        [id] => usize::from(store.remove(id)),
        _ => store.remove_many(&ids.iter().cloned().collect::<HashSet<_>>()),
    };
    super::report_persist_warning(&mut store);

    if removed == 0 {
        return Err(format!("No task matched {}", ids.join(", ")));
    }
    println!("Removed {removed} task(s).");
    Ok(())
}
