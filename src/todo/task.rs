use crate::error::TodoError;
use chrono::{Duration, Local, Months, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default interval for recurring tasks
pub const DEFAULT_RECURRENCE_INTERVAL: u32 = 1;

/// Get the current timestamp in local time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn default_recurrence_interval() -> u32 {
    DEFAULT_RECURRENCE_INTERVAL
}

/// Task priority
///
/// Input is matched case-insensitively; the stored form is always one of the
/// three canonical names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Canonical display name ("High", "Medium", "Low")
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Fixed sort rank: High < Medium < Low
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(TodoError::InvalidPriority),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = TodoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Recurrence pattern for recurring tasks
///
/// "No recurrence" is not a variant; it is represented as
/// `Option::<RecurrencePattern>::None` on the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecurrencePattern {
    /// Repeats every N days
    Daily,
    /// Repeats every N weeks
    Weekly,
    /// Repeats every N calendar months
    Monthly,
}

impl RecurrencePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "Daily",
            RecurrencePattern::Weekly => "Weekly",
            RecurrencePattern::Monthly => "Monthly",
        }
    }

    /// Advance `base` by `interval` units of this pattern
    ///
    /// Monthly arithmetic is calendar based: Jan 31 + 1 month is the last day
    /// of February, not March 3rd.
    ///
    /// # Returns
    /// `None` if the result falls outside the representable date range
    pub fn advance(&self, base: NaiveDateTime, interval: u32) -> Option<NaiveDateTime> {
        match self {
            RecurrencePattern::Daily => {
                base.checked_add_signed(Duration::days(i64::from(interval)))
            }
            RecurrencePattern::Weekly => {
                base.checked_add_signed(Duration::weeks(i64::from(interval)))
            }
            RecurrencePattern::Monthly => base.checked_add_months(Months::new(interval)),
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrencePattern {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(RecurrencePattern::Daily),
            "weekly" => Ok(RecurrencePattern::Weekly),
            "monthly" => Ok(RecurrencePattern::Monthly),
            _ => Err(TodoError::InvalidRecurrencePattern),
        }
    }
}

/// Deserialize an optional recurrence pattern, accepting "None" and "" as absent
pub(crate) fn deserialize_recurrence_pattern<'de, D>(
    deserializer: D,
) -> Result<Option<RecurrencePattern>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    crate::validation::validate_recurrence_pattern(raw.as_deref())
        .map_err(serde::de::Error::custom)
}

/// A todo item in the current schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential identifier, never reused
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Lowercase, deduplicated, in first-seen order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Timestamp when the task was created
    #[serde(default = "local_now")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        deserialize_with = "deserialize_recurrence_pattern",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(default = "default_recurrence_interval")]
    pub recurrence_interval: u32,
    /// Scheduled date of this occurrence, set on tasks spawned by completing
    /// a recurring task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_occurrence: Option<NaiveDateTime>,
}

impl Task {
    /// Check if this task has recurrence configured
    pub fn is_recurring(&self) -> bool {
        self.recurrence_pattern.is_some()
    }

    /// Check whether the task carries `tag` (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }

    /// Calculate the next occurrence date for a recurring task
    ///
    /// # Arguments
    /// * `from` - The base timestamp (the completion time)
    ///
    /// # Returns
    /// The next occurrence if this is a recurring task, None otherwise
    pub fn calculate_next_occurrence(&self, from: NaiveDateTime) -> Option<NaiveDateTime> {
        self.recurrence_pattern?
            .advance(from, self.recurrence_interval)
    }
}

/// Build a fully-populated task from already-validated fields
///
/// The task starts incomplete with `Medium` priority, no tags, no recurrence
/// and `created_at` set to now. Other defaults can be overridden with struct
/// update syntax:
///
/// ```
/// use todo_manager::{Priority, Task, create_task};
///
/// let task = Task {
///     priority: Priority::High,
///     tags: vec!["work".to_string()],
///     ..create_task(7, "Ship release", "")
/// };
/// assert_eq!(task.id, 7);
/// assert!(!task.completed);
/// ```
pub fn create_task(id: u32, title: impl Into<String>, description: impl Into<String>) -> Task {
    Task {
        id,
        title: title.into(),
        description: description.into(),
        completed: false,
        priority: Priority::default(),
        tags: Vec::new(),
        created_at: local_now(),
        recurrence_pattern: None,
        recurrence_interval: DEFAULT_RECURRENCE_INTERVAL,
        next_occurrence: None,
    }
}
