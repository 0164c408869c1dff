// src/config/model.rs

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

/// Top-level task-set file as read from a TOML file, before validation.
///
/// ```toml
/// [settings]
/// time_unit = "seconds"
///
/// [task.t1]
/// arrival = 4
/// cost = 2
/// deadline = 7
/// ```
///
/// The `[settings]` section is optional and defaults to second granularity.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskSetFile {
    /// Global settings from `[settings]`.
    #[serde(default)]
    pub settings: SettingsSection,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the task names. Name order (the `BTreeMap` order) is the
    /// input order the enumerator sees, so within a file the task names
    /// control the tie-break among equal candidates.
    #[serde(default)]
    pub task: BTreeMap<String, TaskTimingConfig>,
}

/// Validated task-set file.
///
/// Constructed via `TryFrom<RawTaskSetFile>` (see `validate`), which is the
/// only path on which the scheduling preconditions are checked.
#[derive(Debug, Clone)]
pub struct TaskSetFile {
    pub settings: SettingsSection,
    pub task: BTreeMap<String, TaskTimingConfig>,
}

impl TaskSetFile {
    /// Construct without validation; prefer `TryFrom` / `load_and_validate`.
    pub fn new_unchecked(
        settings: SettingsSection,
        task: BTreeMap<String, TaskTimingConfig>,
    ) -> Self {
        Self { settings, task }
    }
}

/// Granularity for all timing values in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Seconds,
    Millis,
}

/// `[settings]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsSection {
    #[serde(default)]
    pub time_unit: TimeUnit,
}

impl SettingsSection {
    /// Convert a raw timing value from the file into a `Duration`.
    pub fn duration(&self, value: u64) -> Duration {
        match self.time_unit {
            TimeUnit::Seconds => Duration::from_secs(value),
            TimeUnit::Millis => Duration::from_millis(value),
        }
    }
}

/// `[task.<name>]` section: the three timing parameters of one task.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TaskTimingConfig {
    /// Earliest time the task may begin, from run start.
    pub arrival: u64,
    /// Execution time the task needs once started.
    pub cost: u64,
    /// Absolute time by which the task's work must have finished.
    pub deadline: u64,
}
