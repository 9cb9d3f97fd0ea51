//! List, show, search, filter and sort handlers for the todo console

use crate::TodoConsole;
use crate::command::{SortKey, StatusFilter};
use crate::error::TodoError;
use crate::formatting;
use crate::todo::{
    filter_by_priority, filter_by_status, filter_by_tag, parse_priority_filter,
    sort_by_created_date, sort_by_priority, sort_by_status, sort_by_title,
};

impl TodoConsole {
    /// All todos ordered by id
    pub fn handle_list(&mut self) -> String {
        formatting::format_tasks(&self.store.list())
    }

    pub fn handle_show(&self, id: &str) -> Result<String, TodoError> {
        let task = self.store.get_by_id(id)?;
        Ok(formatting::format_task_detail(&task))
    }

    /// Todos whose title or description contains `keyword`
    pub fn handle_search(&mut self, keyword: &str) -> String {
        formatting::format_tasks(&self.store.search(keyword))
    }

    /// Apply the given filters in sequence; no filters lists everything
    ///
    /// An unrecognized priority is reported instead of silently matching
    /// nothing.
    pub fn handle_filter(
        &mut self,
        status: Option<StatusFilter>,
        priority: Option<&str>,
        tag: Option<&str>,
    ) -> Result<String, TodoError> {
        if let Some(p) = priority
            && parse_priority_filter(p).is_none()
        {
            return Err(TodoError::InvalidPriority);
        }

        let mut tasks = self.store.list();

        if let Some(status) = status {
            tasks = filter_by_status(&tasks, status == StatusFilter::Done);
        }

        if let Some(p) = priority {
            tasks = filter_by_priority(&tasks, p);
        }

        if let Some(t) = tag {
            tasks = filter_by_tag(&tasks, t);
        }

        Ok(formatting::format_tasks(&tasks))
    }

    /// All todos sorted by `key`
    ///
    /// Default directions are A-Z, High first, oldest first and pending
    /// first; `descending` flips them.
    pub fn handle_sort(&mut self, key: SortKey, descending: bool) -> String {
        let tasks = self.store.list();
        let sorted = match key {
            SortKey::Title => sort_by_title(&tasks, !descending),
            SortKey::Priority => sort_by_priority(&tasks, !descending),
            SortKey::Created => sort_by_created_date(&tasks, descending),
            SortKey::Status => sort_by_status(&tasks, !descending),
        };
        formatting::format_tasks(&sorted)
    }
}
