//! `taskbell list` command.

use chrono::{DateTime, Utc};

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::{format_distance, DeadlineState, PriorityFilter, StatusFilter, Task, TaskFilter};

/// Execute the `list` command.
///
/// Displays a table of the tasks passing the filter showing completion,
/// ID, title, priority, deadline, and tags.
///
/// # Errors
///
/// This command currently always succeeds.
pub fn run(
    ctx: &ServiceContext,
    status: StatusFilter,
    priority: PriorityFilter,
    tags: &[String],
) -> Result<(), String> {
    let store = TaskStore::open(ctx);
    let filter = TaskFilter { tags: distinct_tags(tags), status, priority };

    let visible = store.visible(&filter);
    if visible.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    print!("{}", render_table(&visible, ctx.clock.now()));
    println!("\n{} of {} task(s) shown.", visible.len(), store.tasks().len());
    Ok(())
}

/// Renders tasks as an aligned table.
#[must_use]
pub fn render_table(tasks: &[&Task], now: DateTime<Utc>) -> String {
    // Collect rows for column-width calculation.
    let rows: Vec<[String; 6]> = tasks
        .iter()
        .map(|task| {
            [
                if task.completed { "[x]" } else { "[ ]" }.to_string(),
                task.id.clone(),
                task.title.clone(),
                task.priority.to_string(),
                deadline_cell(task, now),
                task.tags.join(", "),
            ]
        })
        .collect();

    let headers = ["", "ID", "TITLE", "PRIORITY", "DEADLINE", "TAGS"];
    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    push_row(&mut out, &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Repeated `-t` flags select a tag once.
fn distinct_tags(tags: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !distinct.contains(tag) {
            distinct.push(tag.clone());
        }
    }
    distinct
}

fn deadline_cell(task: &Task, now: DateTime<Utc>) -> String {
    let Some(deadline) = task.deadline else {
        return "-".to_string();
    };
    let distance = format_distance(deadline, now);
    match DeadlineState::of(task, now) {
        DeadlineState::Overdue => format!("{distance} (overdue)"),
        DeadlineState::DueSoon => format!("{distance} (due soon)"),
        DeadlineState::Later => distance,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::commands::test_support::{fixed_now, memory_context};
    use crate::task::{Priority, TaskDraft};

    #[test]
    fn list_command_empty_store() {
        let (ctx, _) = memory_context();
        assert!(run(&ctx, StatusFilter::All, PriorityFilter::All, &[]).is_ok());
    }

    #[test]
    fn list_command_with_filters() {
        let (ctx, _) = memory_context();
        let mut store = TaskStore::open(&ctx);
        store.add(TaskDraft::new("a").unwrap().tag("home"));
        store.add(TaskDraft::new("b").unwrap().priority(Priority::High));

        let tags = vec!["home".to_string(), "home".to_string()];
        assert!(run(&ctx, StatusFilter::Pending, PriorityFilter::All, &tags).is_ok());
    }

    #[test]
    fn repeated_tag_flags_select_the_tag_once() {
        let tags: Vec<String> =
            ["home", "work", "home"].iter().map(|t| (*t).to_string()).collect();
        assert_eq!(distinct_tags(&tags), vec!["home".to_string(), "work".to_string()]);
    }

    #[test]
    fn table_marks_overdue_and_due_soon() {
        let now = fixed_now();
        let (ctx, _) = memory_context();
        let mut store = TaskStore::open(&ctx);
        store.add(
            TaskDraft::new("Pay rent")
                .unwrap()
                .priority(Priority::High)
                .tags(["finance", "home"])
                .deadline(Some(now + Duration::minutes(45))),
        );
        let late = store
            .add(TaskDraft::new("File taxes").unwrap().deadline(Some(now - Duration::hours(2))));
        store.add(TaskDraft::new("Someday").unwrap());
        store.toggle_completion(&late.id);
        store.toggle_completion(&late.id);

        let visible: Vec<&Task> = store.tasks().iter().collect();
        let table = render_table(&visible, now);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("TITLE") && lines[0].contains("DEADLINE"));
        assert!(lines[2].starts_with("[ ]"));
        assert!(lines[2].contains("in 45 minutes (due soon)"));
        assert!(lines[2].contains("finance, home"));
        assert!(lines[3].contains("2 hours ago (overdue)"));
        assert!(lines[4].contains("Someday"));
        assert!(lines[4].ends_with(" -"));
    }
}
