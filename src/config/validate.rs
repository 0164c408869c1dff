// src/config/validate.rs

use crate::config::model::{RawTaskSetFile, TaskSetFile};
use crate::errors::{FeasrunError, Result};

impl TryFrom<RawTaskSetFile> for TaskSetFile {
    type Error = FeasrunError;

    fn try_from(raw: RawTaskSetFile) -> std::result::Result<Self, Self::Error> {
        validate_raw(&raw)?;
        Ok(TaskSetFile::new_unchecked(raw.settings, raw.task))
    }
}

fn validate_raw(cfg: &RawTaskSetFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_task_timings(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawTaskSetFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(FeasrunError::ConfigError(
            "task-set file must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_timings(cfg: &RawTaskSetFile) -> Result<()> {
    for (name, timing) in cfg.task.iter() {
        if timing.cost == 0 {
            return Err(FeasrunError::ConfigError(format!(
                "task '{}' has cost 0; every task needs a positive execution time",
                name
            )));
        }
        if timing.arrival >= timing.deadline {
            return Err(FeasrunError::ConfigError(format!(
                "task '{}' arrives at {} but its deadline is {}; arrival must precede the deadline",
                name, timing.arrival, timing.deadline
            )));
        }
    }
    Ok(())
}
