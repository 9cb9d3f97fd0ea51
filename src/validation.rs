//! Field validators for todo input
//!
//! This module contains validation and normalization for every user-supplied
//! field: id, title, description, priority, tags and recurrence pattern.
//! All functions are pure; invalid input is reported as a [`TodoError`],
//! never as a panic.

use crate::error::TodoError;
use crate::todo::{Priority, RecurrencePattern};
use std::collections::HashSet;

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;
/// Maximum length of a single tag in characters
pub const MAX_TAG_LEN: usize = 20;
/// Largest accepted recurrence interval
pub const MAX_RECURRENCE_INTERVAL: u32 = 1000;

/// A loosely-typed task id as received from a front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawId {
    /// Free-form text, e.g. typed at a prompt
    Text(String),
    /// An already-numeric value
    Int(i64),
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        RawId::Text(value.to_string())
    }
}

impl From<String> for RawId {
    fn from(value: String) -> Self {
        RawId::Text(value)
    }
}

impl From<&String> for RawId {
    fn from(value: &String) -> Self {
        RawId::Text(value.clone())
    }
}

impl From<i64> for RawId {
    fn from(value: i64) -> Self {
        RawId::Int(value)
    }
}

impl From<i32> for RawId {
    fn from(value: i32) -> Self {
        RawId::Int(i64::from(value))
    }
}

impl From<u32> for RawId {
    fn from(value: u32) -> Self {
        RawId::Int(i64::from(value))
    }
}

/// Tags as received from a front-end: either one comma-delimited string or an
/// already-separated list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagsInput {
    Delimited(String),
    List(Vec<String>),
}

impl From<&str> for TagsInput {
    fn from(value: &str) -> Self {
        TagsInput::Delimited(value.to_string())
    }
}

impl From<String> for TagsInput {
    fn from(value: String) -> Self {
        TagsInput::Delimited(value)
    }
}

impl From<Vec<String>> for TagsInput {
    fn from(value: Vec<String>) -> Self {
        TagsInput::List(value)
    }
}

impl From<Vec<&str>> for TagsInput {
    fn from(value: Vec<&str>) -> Self {
        TagsInput::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TagsInput {
    fn from(value: &[&str]) -> Self {
        TagsInput::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Parse and validate a task id
///
/// # Returns
/// The id as a positive integer, or `InvalidId` if the input is not an
/// integer or is zero/negative
///
/// # Examples
/// ```
/// # use todo_manager::validation::validate_id;
/// assert_eq!(validate_id(" 5 "), Ok(5));
/// assert!(validate_id("abc").is_err());
/// assert!(validate_id(-1).is_err());
/// ```
pub fn validate_id(input: impl Into<RawId>) -> Result<u32, TodoError> {
    let value = match input.into() {
        RawId::Int(n) => n,
        RawId::Text(s) => s.trim().parse::<i64>().map_err(|_| TodoError::InvalidId)?,
    };
    if value <= 0 {
        return Err(TodoError::InvalidId);
    }
    u32::try_from(value).map_err(|_| TodoError::InvalidId)
}

/// Validate a task title
///
/// Emptiness is judged on the trimmed form, but the title itself is returned
/// with its original whitespace.
pub fn validate_title(input: Option<&str>) -> Result<&str, TodoError> {
    let title = match input {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(TodoError::EmptyTitle),
    };
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TodoError::TitleTooLong);
    }
    Ok(title)
}

/// Validate a task description, normalizing absence to an empty string
pub fn validate_description(input: Option<&str>) -> Result<String, TodoError> {
    let description = input.unwrap_or_default();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TodoError::DescriptionTooLong);
    }
    Ok(description.to_string())
}

/// Validate and normalize a priority to its canonical form
pub fn validate_priority(input: Option<&str>) -> Result<Priority, TodoError> {
    match input {
        Some(p) if !p.trim().is_empty() => p.parse(),
        _ => Err(TodoError::InvalidPriority),
    }
}

/// Validate and normalize a set of tags
///
/// Delimited input is split on commas. Each piece is trimmed and empty pieces
/// are dropped. Any piece longer than 20 characters fails the whole call.
/// Survivors are lowercased and deduplicated, keeping first-occurrence order.
///
/// # Examples
/// ```
/// # use todo_manager::validation::{validate_tags, TagsInput};
/// let tags = validate_tags(Some(TagsInput::from("work, Work, WORK"))).unwrap();
/// assert_eq!(tags, vec!["work"]);
/// ```
pub fn validate_tags(input: Option<TagsInput>) -> Result<Vec<String>, TodoError> {
    let pieces: Vec<String> = match input {
        None => return Ok(Vec::new()),
        Some(TagsInput::Delimited(s)) => s.split(',').map(|t| t.trim().to_string()).collect(),
        Some(TagsInput::List(list)) => list.into_iter().map(|t| t.trim().to_string()).collect(),
    };

    if pieces
        .iter()
        .any(|t| t.chars().count() > MAX_TAG_LEN)
    {
        return Err(TodoError::TagTooLong);
    }

    Ok(normalize_tag_set(pieces))
}

/// Lowercase and deduplicate already length-checked tags, dropping empties
///
/// Shared by tag validation and by tag removal, which only needs the
/// normalized casing of the tags to remove.
pub fn normalize_tag_set<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.clone()) {
            normalized.push(tag);
        }
    }
    normalized
}

/// Validate a recurrence pattern
///
/// Absent, blank and "none" (any case) all mean no recurrence and yield
/// `Ok(None)`.
pub fn validate_recurrence_pattern(
    input: Option<&str>,
) -> Result<Option<RecurrencePattern>, TodoError> {
    let pattern = match input.map(str::trim) {
        None => return Ok(None),
        Some(p) if p.is_empty() || p.eq_ignore_ascii_case("none") => return Ok(None),
        Some(p) => p,
    };
    pattern.parse().map(Some)
}

/// Validate a recurrence interval (1..=1000)
pub fn validate_recurrence_interval(interval: u32) -> Result<u32, TodoError> {
    if (1..=MAX_RECURRENCE_INTERVAL).contains(&interval) {
        Ok(interval)
    } else {
        Err(TodoError::InvalidInterval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id_accepts_text_and_numbers() {
        assert_eq!(validate_id("5"), Ok(5));
        assert_eq!(validate_id("+12"), Ok(12));
        assert_eq!(validate_id(7u32), Ok(7));
        assert_eq!(validate_id(3i64), Ok(3));
    }

    #[test]
    fn test_validate_id_rejects_garbage() {
        for bad in ["", "abc", "0", "-1", "1.5", "99999999999"] {
            assert_eq!(validate_id(bad), Err(TodoError::InvalidId), "input {bad:?}");
        }
        assert_eq!(validate_id(0i64), Err(TodoError::InvalidId));
    }

    #[test]
    fn test_validate_title_boundaries() {
        let max = "a".repeat(200);
        assert_eq!(validate_title(Some(max.as_str())), Ok(max.as_str()));
        let too_long = "a".repeat(201);
        assert_eq!(
            validate_title(Some(too_long.as_str())),
            Err(TodoError::TitleTooLong)
        );
    }

    #[test]
    fn test_validate_title_keeps_whitespace() {
        assert_eq!(validate_title(Some("  padded  ")), Ok("  padded  "));
        assert_eq!(validate_title(Some("   ")), Err(TodoError::EmptyTitle));
        assert_eq!(validate_title(None), Err(TodoError::EmptyTitle));
    }

    #[test]
    fn test_validate_title_counts_characters() {
        let title = "é".repeat(200);
        assert!(validate_title(Some(title.as_str())).is_ok());
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description(None), Ok(String::new()));
        assert_eq!(validate_description(Some("x")), Ok("x".to_string()));
        assert!(validate_description(Some("a".repeat(1000).as_str())).is_ok());
        assert_eq!(
            validate_description(Some("a".repeat(1001).as_str())),
            Err(TodoError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_validate_priority() {
        assert_eq!(validate_priority(Some("high")), Ok(Priority::High));
        assert_eq!(validate_priority(Some(" LOW ")), Ok(Priority::Low));
        assert_eq!(validate_priority(None), Err(TodoError::InvalidPriority));
        assert_eq!(validate_priority(Some("  ")), Err(TodoError::InvalidPriority));
        assert_eq!(
            validate_priority(Some("urgent")),
            Err(TodoError::InvalidPriority)
        );
    }

    #[test]
    fn test_validate_tags_string_and_list() {
        assert_eq!(validate_tags(None), Ok(vec![]));
        assert_eq!(
            validate_tags(Some("Work, urgent ,, work".into())),
            Ok(vec!["work".to_string(), "urgent".to_string()])
        );
        assert_eq!(
            validate_tags(Some(vec!["Personal", " Shopping "].into())),
            Ok(vec!["personal".to_string(), "shopping".to_string()])
        );
    }

    #[test]
    fn test_validate_tags_rejects_long_tag() {
        let input = format!("ok, {}", "x".repeat(21));
        assert_eq!(
            validate_tags(Some(input.into())),
            Err(TodoError::TagTooLong)
        );
        assert!(validate_tags(Some("x".repeat(20).into())).is_ok());
    }

    #[test]
    fn test_validate_recurrence_pattern() {
        assert_eq!(validate_recurrence_pattern(None), Ok(None));
        assert_eq!(validate_recurrence_pattern(Some("")), Ok(None));
        assert_eq!(validate_recurrence_pattern(Some("NONE")), Ok(None));
        assert_eq!(
            validate_recurrence_pattern(Some("weekly")),
            Ok(Some(RecurrencePattern::Weekly))
        );
        assert_eq!(
            validate_recurrence_pattern(Some("yearly")),
            Err(TodoError::InvalidRecurrencePattern)
        );
    }

    #[test]
    fn test_validate_recurrence_interval() {
        assert_eq!(validate_recurrence_interval(1), Ok(1));
        assert_eq!(validate_recurrence_interval(1000), Ok(1000));
        assert_eq!(
            validate_recurrence_interval(0),
            Err(TodoError::InvalidInterval)
        );
        assert_eq!(
            validate_recurrence_interval(1001),
            Err(TodoError::InvalidInterval)
        );
    }
}
