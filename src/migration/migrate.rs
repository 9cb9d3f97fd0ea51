//! Upgrade steps between task record versions
//!
//! Each step fills in the fields its target version introduced, using the
//! same defaults a freshly created task gets. Fields that are already present
//! are carried over untouched, so upgrading a current record is a no-op.

use super::legacy_types::{TaskRecord, TaskV1, TaskV2};
use crate::todo::{DEFAULT_RECURRENCE_INTERVAL, Priority, Task, local_now};
use chrono::NaiveDateTime;

/// Upgrade a version 1 record to version 2
///
/// # Arguments
/// * `task` - The version 1 record
/// * `now` - Timestamp used as `created_at`, which version 1 never recorded
pub fn upgrade_v1_to_v2(task: TaskV1, now: NaiveDateTime) -> TaskV2 {
    TaskV2 {
        id: task.id,
        title: task.title,
        description: task.description,
        completed: task.completed,
        priority: Priority::default(),
        tags: Vec::new(),
        created_at: now,
    }
}

/// Upgrade a version 2 record to the current schema (no recurrence)
pub fn upgrade_v2_to_current(task: TaskV2) -> Task {
    Task {
        id: task.id,
        title: task.title,
        description: task.description,
        completed: task.completed,
        priority: task.priority,
        tags: task.tags,
        created_at: task.created_at,
        recurrence_pattern: None,
        recurrence_interval: DEFAULT_RECURRENCE_INTERVAL,
        next_occurrence: None,
    }
}

/// Bring a record of any version up to the current schema
///
/// Idempotent: migrating a record that is already current returns it as-is.
pub fn migrate_to_current_schema(record: TaskRecord) -> Task {
    migrate_to_current_schema_at(record, local_now())
}

/// Like [`migrate_to_current_schema`] with an explicit timestamp for any
/// missing `created_at`
pub fn migrate_to_current_schema_at(record: TaskRecord, now: NaiveDateTime) -> Task {
    match record {
        TaskRecord::V1(task) => upgrade_v2_to_current(upgrade_v1_to_v2(task, now)),
        TaskRecord::V2(task) => upgrade_v2_to_current(task),
        TaskRecord::Current(task) => task,
    }
}

impl TaskRecord {
    /// Upgrade this record in place and run `f` on the current-schema task
    ///
    /// # Returns
    /// Whatever `f` returns
    pub(crate) fn upgrade_with<R>(
        &mut self,
        now: NaiveDateTime,
        f: impl FnOnce(&mut Task) -> R,
    ) -> R {
        if let TaskRecord::Current(task) = self {
            return f(task);
        }
        let legacy = std::mem::replace(self, TaskRecord::V1(TaskV1::default()));
        let mut task = migrate_to_current_schema_at(legacy, now);
        let result = f(&mut task);
        *self = TaskRecord::Current(task);
        result
    }

    /// A current-schema copy of this record, leaving the stored record as-is
    pub fn snapshot(&self, now: NaiveDateTime) -> Task {
        migrate_to_current_schema_at(self.clone(), now)
    }
}
