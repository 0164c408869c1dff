// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{RawTaskSetFile, TaskSetFile};
use crate::errors::Result;

/// Load a task-set file from a given path and return the raw
/// `RawTaskSetFile`.
///
/// This only performs TOML deserialization; it does **not** check the
/// scheduling preconditions. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskSetFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawTaskSetFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a task-set file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that the file names at least one task and that every task has
///   a positive cost and arrives before its deadline.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskSetFile> {
    let raw = load_from_path(&path)?;
    let cfg = TaskSetFile::try_from(raw)?;
    Ok(cfg)
}
