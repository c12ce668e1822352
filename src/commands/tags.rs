//! `taskbell tags` command.

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `tags` command.
///
/// Prints the tag universe, one tag per line, in first-seen order.
///
/// # Errors
///
/// This command currently always succeeds.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let store = TaskStore::open(ctx);
    if store.tags().is_empty() {
        println!("No tags yet.");
    } else {
        for tag in store.tags() {
            println!("{tag}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_context;
    use crate::task::TaskDraft;

    #[test]
    fn tags_command_runs_on_empty_and_filled_store() {
        let (ctx, _) = memory_context();
        assert!(run(&ctx).is_ok());

        TaskStore::open(&ctx).add(TaskDraft::new("x").unwrap().tags(["a", "b"]));
        assert!(run(&ctx).is_ok());
        assert_eq!(TaskStore::open(&ctx).tags(), ["a".to_string(), "b".to_string()]);
    }
}
