//! Console command grammar
//!
//! Each input line is split into words and parsed with clap, so the console
//! gets usage errors and `help` output for free.

use clap::{Parser, Subcommand, ValueEnum};

/// One parsed console line
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Manage your todo list"
)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Add a new todo
    Add {
        /// Title words
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all todos by id
    #[command(alias = "ls")]
    List,
    /// Show every field of one todo
    Show { id: String },
    /// Change a todo's title and/or description
    Update {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a todo
    #[command(alias = "rm")]
    Delete { id: String },
    /// Mark a todo complete
    #[command(alias = "done")]
    Complete { id: String },
    /// Mark a todo incomplete
    Incomplete { id: String },
    /// Set priority (high, medium, low)
    Priority { id: String, level: String },
    /// Add comma-separated tags
    Tag {
        id: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
    /// Remove comma-separated tags
    Untag {
        id: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
    /// Set recurrence (none, daily, weekly, monthly)
    Recur {
        id: String,
        pattern: String,
        /// Repeat every N days/weeks/months
        #[arg(short, long, default_value_t = 1)]
        interval: u32,
    },
    /// Search titles and descriptions
    Search {
        #[arg(num_args = 0..)]
        keyword: Vec<String>,
    },
    /// Filter by status, priority and/or tag
    Filter {
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Sort the list
    Sort {
        #[arg(value_enum)]
        by: SortKey,
        /// Reverse the default direction
        #[arg(long)]
        desc: bool,
    },
    /// Leave the console
    #[command(alias = "quit")]
    Exit,
}

impl ConsoleCommand {
    /// Command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Add { .. } => "add",
            ConsoleCommand::List => "list",
            ConsoleCommand::Show { .. } => "show",
            ConsoleCommand::Update { .. } => "update",
            ConsoleCommand::Delete { .. } => "delete",
            ConsoleCommand::Complete { .. } => "complete",
            ConsoleCommand::Incomplete { .. } => "incomplete",
            ConsoleCommand::Priority { .. } => "priority",
            ConsoleCommand::Tag { .. } => "tag",
            ConsoleCommand::Untag { .. } => "untag",
            ConsoleCommand::Recur { .. } => "recur",
            ConsoleCommand::Search { .. } => "search",
            ConsoleCommand::Filter { .. } => "filter",
            ConsoleCommand::Sort { .. } => "sort",
            ConsoleCommand::Exit => "exit",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Done,
    Pending,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Priority,
    Created,
    Status,
}

/// Split a command line into words
///
/// Words are separated by whitespace; a double-quoted run is one word even if
/// it contains spaces. An unterminated quote runs to the end of the line.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}
