//! Update, delete and priority handlers for the todo console

use crate::TodoConsole;
use crate::error::TodoError;
use crate::validation::validate_id;

impl TodoConsole {
    /// Change a todo's title and/or description
    ///
    /// An empty description (`-d ""`) clears it; an omitted one keeps it.
    pub fn handle_update(
        &mut self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<String, TodoError> {
        let id = self.store.update(id, title, description)?;
        Ok(format!("Todo ID {} updated successfully!", id))
    }

    pub fn handle_delete(&mut self, id: &str) -> Result<String, TodoError> {
        let id = self.store.delete(id)?;
        Ok(format!("Todo ID {} deleted successfully!", id))
    }

    pub fn handle_priority(&mut self, id: &str, level: &str) -> Result<String, TodoError> {
        let id = validate_id(id)?;
        let priority = self.store.update_priority(id, level)?;
        Ok(format!("Todo ID {} priority updated to {}!", id, priority))
    }
}
