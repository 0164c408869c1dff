// src/config/mod.rs

//! TOML task-set files.
//!
//! - [`model`] maps the TOML structure onto Rust types.
//! - [`loader`] reads and deserializes files.
//! - [`validate`] checks the scheduling preconditions; a [`TaskSetFile`]
//!   only exists once they hold.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{RawTaskSetFile, SettingsSection, TaskSetFile, TaskTimingConfig, TimeUnit};
