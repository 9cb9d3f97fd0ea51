//! Legacy task record types
//!
//! `TaskV1` and `TaskV2` are frozen snapshots of earlier record shapes. New
//! code should work with [`Task`] and only reach for these when importing
//! older data.

use crate::todo::{Priority, Task, local_now};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A version 1 record: the original four fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskV1 {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// A version 2 record: adds priority, tags and a creation timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskV2 {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "local_now")]
    pub created_at: NaiveDateTime,
}

/// A stored task record in any supported shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRecord {
    V1(TaskV1),
    V2(TaskV2),
    Current(Task),
}

impl TaskRecord {
    pub fn id(&self) -> u32 {
        match self {
            TaskRecord::V1(t) => t.id,
            TaskRecord::V2(t) => t.id,
            TaskRecord::Current(t) => t.id,
        }
    }

    /// Record version (1, 2 or 3)
    pub fn version(&self) -> u32 {
        match self {
            TaskRecord::V1(_) => 1,
            TaskRecord::V2(_) => 2,
            TaskRecord::Current(_) => 3,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, TaskRecord::Current(_))
    }

    pub fn title(&self) -> &str {
        match self {
            TaskRecord::V1(t) => &t.title,
            TaskRecord::V2(t) => &t.title,
            TaskRecord::Current(t) => &t.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TaskRecord::V1(t) => &t.description,
            TaskRecord::V2(t) => &t.description,
            TaskRecord::Current(t) => &t.description,
        }
    }

    pub fn completed(&self) -> bool {
        match self {
            TaskRecord::V1(t) => t.completed,
            TaskRecord::V2(t) => t.completed,
            TaskRecord::Current(t) => t.completed,
        }
    }

    /// Tags carried by the record (version 1 records have none)
    pub fn tags(&self) -> &[String] {
        match self {
            TaskRecord::V1(_) => &[],
            TaskRecord::V2(t) => &t.tags,
            TaskRecord::Current(t) => &t.tags,
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        match self {
            TaskRecord::V1(t) => t.title = title,
            TaskRecord::V2(t) => t.title = title,
            TaskRecord::Current(t) => t.title = title,
        }
    }

    pub(crate) fn set_description(&mut self, description: String) {
        match self {
            TaskRecord::V1(t) => t.description = description,
            TaskRecord::V2(t) => t.description = description,
            TaskRecord::Current(t) => t.description = description,
        }
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        match self {
            TaskRecord::V1(t) => t.completed = completed,
            TaskRecord::V2(t) => t.completed = completed,
            TaskRecord::Current(t) => t.completed = completed,
        }
    }

    pub(crate) fn set_tags(&mut self, tags: Vec<String>) {
        match self {
            // version 1 records carry no tags
            TaskRecord::V1(_) => {}
            TaskRecord::V2(t) => t.tags = tags,
            TaskRecord::Current(t) => t.tags = tags,
        }
    }
}

impl From<TaskV1> for TaskRecord {
    fn from(task: TaskV1) -> Self {
        TaskRecord::V1(task)
    }
}

impl From<TaskV2> for TaskRecord {
    fn from(task: TaskV2) -> Self {
        TaskRecord::V2(task)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        TaskRecord::Current(task)
    }
}
