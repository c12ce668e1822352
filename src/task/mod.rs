//! Task types, drafts, filtering, and deadline helpers.
//!
//! A [`Task`] is the only persisted entity. New tasks start life as a
//! validated [`TaskDraft`]; the store assigns the ID.

mod deadline;
mod draft;
mod filter;
mod model;

pub use deadline::{format_distance, parse_deadline, DeadlineState};
pub use draft::{DraftError, TaskDraft};
pub use filter::{visible, PriorityFilter, StatusFilter, TaskFilter};
pub use model::{tag_universe, Priority, Task};
