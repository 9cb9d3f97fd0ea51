//! Search, filter and sort operations
//!
//! `search` goes through the store so that stale records are upgraded on the
//! way out. Filters and sorts are pure functions over an already-fetched
//! list and never touch the store.

use super::task::{Priority, Task};
use super::task_store::TaskStore;
use std::cmp::Ordering;

impl TaskStore {
    /// Case-insensitive keyword search over title and description
    ///
    /// A blank keyword returns every task. Results are ordered by id.
    pub fn search(&mut self, keyword: &str) -> Vec<Task> {
        let tasks = self.list();
        if keyword.trim().is_empty() {
            return tasks;
        }

        let keyword_lower = keyword.to_lowercase();
        tasks
            .into_iter()
            .filter(|task| {
                task.title.to_lowercase().contains(&keyword_lower)
                    || task.description.to_lowercase().contains(&keyword_lower)
            })
            .collect()
    }
}

/// Keep tasks whose completion status matches `completed`
pub fn filter_by_status(tasks: &[Task], completed: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.completed == completed)
        .cloned()
        .collect()
}

/// Keep tasks with the given priority (case-insensitive)
///
/// An unrecognized priority matches nothing.
pub fn filter_by_priority(tasks: &[Task], priority: &str) -> Vec<Task> {
    let priority_lower = priority.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| task.priority.as_str().to_lowercase() == priority_lower)
        .cloned()
        .collect()
}

/// Keep tasks carrying `tag` (case-insensitive); untagged tasks never match
pub fn filter_by_tag(tasks: &[Task], tag: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.has_tag(tag.trim()))
        .cloned()
        .collect()
}

/// Stable sort by `key`, reversing the comparison for descending order
///
/// Equal keys keep their input order in both directions.
fn sorted_by<K, F>(tasks: &[Task], ascending: bool, key: F) -> Vec<Task>
where
    K: Ord,
    F: Fn(&Task) -> K,
{
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        let ordering: Ordering = key(a).cmp(&key(b));
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

/// Sort alphabetically by title, ignoring case
pub fn sort_by_title(tasks: &[Task], ascending: bool) -> Vec<Task> {
    sorted_by(tasks, ascending, |task| task.title.to_lowercase())
}

/// Sort by priority rank; `high_first` puts High before Medium before Low
pub fn sort_by_priority(tasks: &[Task], high_first: bool) -> Vec<Task> {
    sorted_by(tasks, high_first, |task| task.priority.rank())
}

/// Sort by creation timestamp
pub fn sort_by_created_date(tasks: &[Task], newest_first: bool) -> Vec<Task> {
    sorted_by(tasks, !newest_first, |task| task.created_at)
}

/// Sort by completion status; `incomplete_first` puts pending tasks on top
pub fn sort_by_status(tasks: &[Task], incomplete_first: bool) -> Vec<Task> {
    sorted_by(tasks, incomplete_first, |task| task.completed)
}

/// Parse a priority filter argument, for front-ends that want to reject
/// typos instead of silently matching nothing
pub fn parse_priority_filter(priority: &str) -> Option<Priority> {
    priority.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::create_task;

    fn task(id: u32, title: &str, priority: Priority, completed: bool) -> Task {
        Task {
            priority,
            completed,
            ..create_task(id, title, "")
        }
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let tasks = vec![
            task(1, "a", Priority::Medium, false),
            task(2, "b", Priority::High, false),
            task(3, "c", Priority::Medium, false),
        ];

        let high_first: Vec<u32> = sort_by_priority(&tasks, true).iter().map(|t| t.id).collect();
        assert_eq!(high_first, vec![2, 1, 3]);

        let low_first: Vec<u32> = sort_by_priority(&tasks, false).iter().map(|t| t.id).collect();
        assert_eq!(low_first, vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let tasks = vec![
            task(1, "banana", Priority::Medium, false),
            task(2, "Apple", Priority::Medium, false),
            task(3, "cherry", Priority::Medium, false),
        ];
        let ids: Vec<u32> = sort_by_title(&tasks, true).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
