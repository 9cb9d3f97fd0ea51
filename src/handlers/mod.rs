//! Console command handlers
//!
//! Each command family lives in its own file as methods on
//! [`TodoConsole`](crate::TodoConsole). Handlers return the rendered success
//! text or the store's [`TodoError`](crate::TodoError) unchanged.

pub mod add;
pub mod change_status;
pub mod list;
pub mod recurrence;
pub mod tags;
pub mod update;
