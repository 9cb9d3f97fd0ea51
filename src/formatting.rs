//! Formatting helper functions for the todo console
//!
//! This module contains the text rendering for task lists and single tasks.

use crate::todo::Task;

/// Shown when a list, search or filter matches nothing
pub const EMPTY_LIST_MESSAGE: &str = "No todos found.";

/// Widest title shown in a table row before truncation
const TITLE_COLUMN_WIDTH: usize = 40;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn status_label(task: &Task) -> &'static str {
    if task.completed { "Done" } else { "Pending" }
}

fn tags_label(task: &Task) -> String {
    if task.tags.is_empty() {
        "-".to_string()
    } else {
        task.tags.join(", ")
    }
}

/// Shorten `title` to the table column, marking the cut with "..."
fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_COLUMN_WIDTH {
        return title.to_string();
    }
    let mut short: String = title.chars().take(TITLE_COLUMN_WIDTH - 3).collect();
    short.push_str("...");
    short
}

/// Format tasks as a table in the given order
///
/// # Arguments
/// * `tasks` - Tasks to render, already sorted by the caller
///
/// # Returns
/// One header row, a separator and one row per task; recurring tasks get a
/// marker after their title. Returns "No todos found." for an empty slice.
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let rows: Vec<[String; 5]> = tasks
        .iter()
        .map(|task| {
            let mut title = truncate_title(&task.title);
            if let Some(pattern) = task.recurrence_pattern {
                title.push_str(&format!(" ({})", pattern));
            }
            [
                task.id.to_string(),
                status_label(task).to_string(),
                task.priority.to_string(),
                title,
                tags_label(task),
            ]
        })
        .collect();

    let header = ["ID", "Status", "Priority", "Title", "Tags"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut result = render(&header[..]);
    result.push('\n');
    result.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        result.push('\n');
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        result.push_str(&render(&cells[..]));
    }
    result
}

/// Format every field of a single task
pub fn format_task_detail(task: &Task) -> String {
    let mut result = format!("ID: {}\n", task.id);
    result.push_str(&format!("Title: {}\n", task.title));
    if !task.description.is_empty() {
        result.push_str(&format!("Description: {}\n", task.description));
    }
    result.push_str(&format!("Status: {}\n", status_label(task)));
    result.push_str(&format!("Priority: {}\n", task.priority));
    result.push_str(&format!("Tags: {}\n", tags_label(task)));
    match task.recurrence_pattern {
        Some(pattern) => result.push_str(&format!(
            "Recurrence: {} (every {})\n",
            pattern, task.recurrence_interval
        )),
        None => result.push_str("Recurrence: None\n"),
    }
    if let Some(next) = task.next_occurrence {
        result.push_str(&format!("Next occurrence: {}\n", next.format(DATE_FORMAT)));
    }
    result.push_str(&format!("Created: {}", task.created_at.format(DATE_FORMAT)));
    result
}
