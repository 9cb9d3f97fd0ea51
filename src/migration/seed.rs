//! Seed file loading
//!
//! A seed file is a TOML document whose `format_version` selects the record
//! shape of its `[[tasks]]` entries:
//!
//! ```toml
//! format_version = 1
//!
//! [[tasks]]
//! id = 1
//! title = "Buy milk"
//! ```
//!
//! Records are returned in their original version; upgrading happens lazily
//! inside the store.

use super::legacy_types::{TaskRecord, TaskV1, TaskV2};
use crate::todo::Task;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Record version written by this build
pub const CURRENT_FORMAT_VERSION: u32 = 3;

#[derive(Deserialize)]
struct SeedHeader {
    #[serde(default = "default_format_version")]
    format_version: u32,
}

#[derive(Deserialize)]
struct SeedTasks<T> {
    #[serde(default = "Vec::new")]
    tasks: Vec<T>,
}

fn default_format_version() -> u32 {
    CURRENT_FORMAT_VERSION
}

fn parse_tasks<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    let seed: SeedTasks<T> = toml::from_str(content)?;
    Ok(seed.tasks)
}

/// Parse seed file content into task records
///
/// A missing `format_version` means the current version.
pub fn parse_seed(content: &str) -> Result<Vec<TaskRecord>> {
    let header: SeedHeader = toml::from_str(content).context("Invalid seed file")?;

    let records = match header.format_version {
        1 => parse_tasks::<TaskV1>(content)?
            .into_iter()
            .map(TaskRecord::V1)
            .collect(),
        2 => parse_tasks::<TaskV2>(content)?
            .into_iter()
            .map(TaskRecord::V2)
            .collect(),
        3 => parse_tasks::<Task>(content)?
            .into_iter()
            .map(TaskRecord::Current)
            .collect(),
        other => bail!(
            "Unsupported seed format_version {} (supported: 1, 2, {})",
            other,
            CURRENT_FORMAT_VERSION
        ),
    };
    Ok(records)
}

/// Read and parse a seed file
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed(&content).with_context(|| format!("Failed to parse seed file {}", path.display()))
}
