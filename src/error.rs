//! Error taxonomy for todo operations
//!
//! Every variant renders to a stable, user-displayable message so that a
//! front-end can print it unmodified.

use thiserror::Error;

/// Errors returned by validators and [`TaskStore`](crate::TaskStore) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Value is not parseable as a positive integer
    #[error("Error: ID must be a positive integer.")]
    InvalidId,

    /// Well-formed id with no matching live task
    #[error("Error: Todo with ID {0} not found.")]
    NotFound(u32),

    #[error("Error: Title cannot be empty.")]
    EmptyTitle,

    #[error("Error: Title exceeds 200 character limit.")]
    TitleTooLong,

    #[error("Error: Description exceeds 1000 character limit.")]
    DescriptionTooLong,

    #[error("Error: Priority must be High, Medium, or Low.")]
    InvalidPriority,

    #[error("Error: Recurrence pattern must be None, Daily, Weekly, or Monthly.")]
    InvalidRecurrencePattern,

    #[error("Error: Recurrence interval must be between 1 and 1000.")]
    InvalidInterval,

    #[error("Error: Each tag must be 1-20 characters.")]
    TagTooLong,

    /// The store already holds the maximum number of tasks
    #[error("Error: Maximum 1000 todos reached.")]
    CapacityExceeded,

    /// An imported record reuses an id that is live or was already handed out
    #[error("Error: Todo with ID {0} already exists.")]
    DuplicateId(u32),

    /// The id counter has reached the largest representable id
    #[error("Error: No more todo IDs are available.")]
    IdsExhausted,
}
