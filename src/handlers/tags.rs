//! Tag handlers for the todo console

use crate::TodoConsole;
use crate::error::TodoError;
use crate::validation::validate_id;

impl TodoConsole {
    /// Add comma-separated tags to a todo
    pub fn handle_add_tags(&mut self, id: &str, tags: &str) -> Result<String, TodoError> {
        let id = validate_id(id)?;
        self.store.add_tags(id, tags)?;
        Ok(format!("Tags added to todo ID {}!", id))
    }

    /// Remove comma-separated tags from a todo
    pub fn handle_remove_tags(&mut self, id: &str, tags: &str) -> Result<String, TodoError> {
        let id = validate_id(id)?;
        self.store.remove_tags(id, tags)?;
        Ok(format!("Tags removed from todo ID {}!", id))
    }
}
