//! Property-based tests for task visibility filtering.

use proptest::prelude::*;
use taskbell::task::{visible, Priority, PriorityFilter, StatusFilter, Task, TaskFilter};

const TAGS: [&str; 4] = ["home", "work", "finance", "errand"];

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Low), Just(Priority::Medium), Just(Priority::High)]
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len())
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

fn tasks_strategy() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((priority_strategy(), tags_strategy(), any::<bool>()), 0..40).prop_map(
        |drafts| {
            drafts
                .into_iter()
                .enumerate()
                .map(|(i, (priority, tags, completed))| Task {
                    id: format!("t{i}"),
                    title: format!("Task {i}"),
                    description: String::new(),
                    deadline: None,
                    priority,
                    tags,
                    completed,
                })
                .collect()
        },
    )
}

fn filter_strategy() -> impl Strategy<Value = TaskFilter> {
    (
        tags_strategy(),
        prop_oneof![
            Just(StatusFilter::All),
            Just(StatusFilter::Completed),
            Just(StatusFilter::Pending)
        ],
        prop_oneof![Just(PriorityFilter::All), priority_strategy().prop_map(PriorityFilter::Only)],
    )
        .prop_map(|(tags, status, priority)| TaskFilter { tags, status, priority })
}

/// The visibility predicate written out longhand.
fn expected(task: &Task, filter: &TaskFilter) -> bool {
    let tag_ok = filter.tags.is_empty() || task.tags.iter().any(|t| filter.tags.contains(t));
    let status_ok = match filter.status {
        StatusFilter::All => true,
        StatusFilter::Completed => task.completed,
        StatusFilter::Pending => !task.completed,
    };
    let priority_ok = match filter.priority {
        PriorityFilter::All => true,
        PriorityFilter::Only(p) => task.priority == p,
    };
    tag_ok && status_ok && priority_ok
}

/// Property: `visible` returns exactly the tasks satisfying the predicate
/// conjunction, in their original order.
#[test]
fn prop_visible_matches_predicate_in_order() {
    proptest!(|(tasks in tasks_strategy(), filter in filter_strategy())| {
        let shown: Vec<&str> = visible(&tasks, &filter).iter().map(|t| t.id.as_str()).collect();
        let wanted: Vec<&str> = tasks
            .iter()
            .filter(|t| expected(t, &filter))
            .map(|t| t.id.as_str())
            .collect();
        prop_assert_eq!(shown, wanted);
    });
}

/// Property: the default filter hides nothing.
#[test]
fn prop_default_filter_is_identity() {
    proptest!(|(tasks in tasks_strategy())| {
        prop_assert_eq!(visible(&tasks, &TaskFilter::default()).len(), tasks.len());
    });
}
