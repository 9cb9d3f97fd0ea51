//! Add handler for the todo console

use crate::TodoConsole;
use crate::error::TodoError;

impl TodoConsole {
    /// Create a todo from a title and optional description
    pub fn handle_add(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> Result<String, TodoError> {
        let id = self.store.add(Some(title), description)?;
        Ok(format!("Todo added successfully! (ID: {})", id))
    }
}
