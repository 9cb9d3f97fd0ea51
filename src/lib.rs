//! Todo Manager Library
//!
//! An in-memory todo list with validation, priorities, tags, search,
//! filtering, sorting and recurring tasks.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Console Layer**: `TodoConsole` - Parses command lines and renders results
//! - **Domain Layer**: `todo` module - The task store and its operations
//! - **Validation Layer**: `validation` module - Pure field validators
//!
//! Older task record shapes are handled by the `migration` module and are
//! upgraded lazily by the store.
//!
//! # Example
//!
//! ```
//! use todo_manager::TaskStore;
//!
//! let mut store = TaskStore::new();
//! let id = store.add(Some("Buy milk"), None).unwrap();
//! store.add_tags(id, "groceries, errands").unwrap();
//! store.set_completed(id, true).unwrap();
//!
//! let tasks = store.list();
//! assert_eq!(tasks[0].description, "");
//! assert!(tasks[0].completed);
//! ```

mod command;
pub mod config;
mod error;
pub mod formatting;
mod handlers;
pub mod migration;
mod todo;
pub mod validation;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

// Re-export commonly used types
pub use command::{ConsoleCommand, ConsoleLine, SortKey, StatusFilter, split_command_line};
pub use config::Config;
pub use error::TodoError;
pub use todo::*;
pub use validation::{RawId, TagsInput};

/// Outcome of executing one console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleReply {
    /// Text to show the user
    pub output: String,
    /// The command was rejected
    pub is_error: bool,
    /// The user asked to leave
    pub exit: bool,
}

impl ConsoleReply {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
            exit: false,
        }
    }

    fn error(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: true,
            exit: false,
        }
    }
}

/// Console front-end for a [`TaskStore`]
///
/// Translates command lines into store operations and renders the results.
/// Holds no state of its own beyond the store.
pub struct TodoConsole {
    pub(crate) store: TaskStore,
}

impl Default for TodoConsole {
    fn default() -> Self {
        Self::new(TaskStore::new())
    }
}

impl TodoConsole {
    /// Create a console around an existing store
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Import task records from a seed file
    ///
    /// # Returns
    /// The number of imported tasks
    pub fn import_seed(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let records = migration::load_seed_file(path)?;
        let count = self
            .store
            .import(records)
            .with_context(|| format!("Failed to import seed file {}", path.display()))?;
        info!(count, path = %path.display(), "seed tasks imported");
        Ok(count)
    }

    /// Parse and run one command line
    ///
    /// Blank lines produce an empty reply. Parse errors and rejected
    /// operations come back as error replies; nothing here panics on bad
    /// input.
    pub fn execute(&mut self, line: &str) -> ConsoleReply {
        let words = split_command_line(line);
        if words.is_empty() {
            return ConsoleReply::ok("");
        }

        let parsed = match ConsoleLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        ConsoleReply::ok(e.to_string().trim_end())
                    }
                    _ => ConsoleReply::error(e.to_string().trim_end()),
                };
            }
        };

        let name = parsed.command.name();
        match self.dispatch(parsed.command) {
            Ok(Some(output)) => ConsoleReply::ok(output),
            Ok(None) => ConsoleReply {
                output: "Goodbye!".to_string(),
                is_error: false,
                exit: true,
            },
            Err(e) => {
                warn!(command = name, error = %e, "command rejected");
                ConsoleReply::error(e.to_string())
            }
        }
    }

    /// Run a parsed command; `Ok(None)` means exit
    fn dispatch(&mut self, command: ConsoleCommand) -> Result<Option<String>, TodoError> {
        let output = match command {
            ConsoleCommand::Add { title, description } => {
                self.handle_add(&title.join(" "), description.as_deref())?
            }
            ConsoleCommand::List => self.handle_list(),
            ConsoleCommand::Show { id } => self.handle_show(&id)?,
            ConsoleCommand::Update {
                id,
                title,
                description,
            } => self.handle_update(&id, title.as_deref(), description.as_deref())?,
            ConsoleCommand::Delete { id } => self.handle_delete(&id)?,
            ConsoleCommand::Complete { id } => self.handle_change_status(&id, true)?,
            ConsoleCommand::Incomplete { id } => self.handle_change_status(&id, false)?,
            ConsoleCommand::Priority { id, level } => self.handle_priority(&id, &level)?,
            ConsoleCommand::Tag { id, tags } => self.handle_add_tags(&id, &tags.join(" "))?,
            ConsoleCommand::Untag { id, tags } => {
                self.handle_remove_tags(&id, &tags.join(" "))?
            }
            ConsoleCommand::Recur {
                id,
                pattern,
                interval,
            } => self.handle_recurrence(&id, &pattern, interval)?,
            ConsoleCommand::Search { keyword } => self.handle_search(&keyword.join(" ")),
            ConsoleCommand::Filter {
                status,
                priority,
                tag,
            } => self.handle_filter(status, priority.as_deref(), tag.as_deref())?,
            ConsoleCommand::Sort { by, desc } => self.handle_sort(by, desc),
            ConsoleCommand::Exit => return Ok(None),
        };
        Ok(Some(output))
    }
}
