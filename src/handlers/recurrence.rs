//! Recurrence handler for the todo console

use crate::TodoConsole;
use crate::error::TodoError;
use crate::validation::validate_id;

impl TodoConsole {
    /// Set or clear a todo's recurrence
    ///
    /// `interval` is ignored when `pattern` is "none".
    pub fn handle_recurrence(
        &mut self,
        id: &str,
        pattern: &str,
        interval: u32,
    ) -> Result<String, TodoError> {
        let id = validate_id(id)?;
        let stored = self.store.set_recurrence(id, pattern, interval)?;
        Ok(match stored {
            Some(pattern) if interval > 1 => format!(
                "Todo ID {} recurrence set to {} (every {})!",
                id, pattern, interval
            ),
            Some(pattern) => format!("Todo ID {} recurrence set to {}!", id, pattern),
            None => format!("Todo ID {} recurrence removed!", id),
        })
    }
}
