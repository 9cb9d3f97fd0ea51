//! Todo domain models and business logic
//!
//! - `task`: the current task schema, priority and recurrence types
//! - `task_store`: the in-memory store and all mutating operations
//! - `queries`: search plus pure filter/sort helpers

mod queries;
mod task;
mod task_store;

pub use queries::{
    filter_by_priority, filter_by_status, filter_by_tag, parse_priority_filter,
    sort_by_created_date, sort_by_priority, sort_by_status, sort_by_title,
};
pub use task::{
    DEFAULT_RECURRENCE_INTERVAL, Priority, RecurrencePattern, Task, create_task, local_now,
};
pub use task_store::{Completion, MAX_TASKS, SpawnedOccurrence, TaskStore};
