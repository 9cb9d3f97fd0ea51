//! Migration module for older task record shapes
//!
//! Records created by earlier versions of the application lack the fields
//! added since. Each shape is modelled as its own type and upgraded one step
//! at a time until it reaches the current [`Task`](crate::Task).
//!
//! ## Record Versions
//!
//! - **Version 1**: id, title, description, completed
//! - **Version 2**: adds priority, tags and created_at
//! - **Version 3** (current): adds recurrence_pattern, recurrence_interval and next_occurrence
//!
//! ## Adding a Version
//!
//! 1. Freeze the current `Task` shape as a new legacy type
//! 2. Add an `upgrade_vN_to_current` step and route the old step through it
//! 3. Teach the seed loader the new `format_version`

mod legacy_types;
mod migrate;
mod seed;

pub use legacy_types::{TaskRecord, TaskV1, TaskV2};
pub use migrate::{
    migrate_to_current_schema, migrate_to_current_schema_at, upgrade_v1_to_v2,
    upgrade_v2_to_current,
};
pub use seed::{CURRENT_FORMAT_VERSION, load_seed_file, parse_seed};
