//! Change status handler for the todo console

use crate::TodoConsole;
use crate::error::TodoError;

impl TodoConsole {
    /// Mark a todo complete or incomplete
    ///
    /// Completing a recurring todo reports the id of the occurrence it
    /// spawned.
    pub fn handle_change_status(&mut self, id: &str, completed: bool) -> Result<String, TodoError> {
        let completion = self.store.set_completed(id, completed)?;

        if !completion.completed {
            return Ok(format!(
                "Todo ID {} marked as incomplete!",
                completion.id
            ));
        }

        let mut message = format!("Todo ID {} marked as complete!", completion.id);
        if let Some(next) = completion.spawned {
            message.push_str(&format!(
                " Next occurrence created (ID: {}).",
                next.id
            ));
        }
        Ok(message)
    }
}
