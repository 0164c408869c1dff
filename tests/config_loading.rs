// tests/config_loading.rs

//! Task-set file loading and validation.

mod common;
use crate::common::init_tracing;

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use feasrun::config::{TaskSetFile, TimeUnit, load_and_validate};
use feasrun::errors::FeasrunError;
use feasrun_test_utils::builders::TaskSetFileBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_a_seconds_task_set() {
    init_tracing();

    let file = write_config(
        r#"
[task.t1]
arrival = 4
cost = 2
deadline = 7

[task.t2]
arrival = 1
cost = 1
deadline = 5
"#,
    );

    let cfg = load_and_validate(file.path()).expect("valid config");

    assert_eq!(cfg.task.len(), 2);
    assert_eq!(cfg.settings.time_unit, TimeUnit::Seconds); // the default
    assert_eq!(cfg.settings.duration(7), Duration::from_secs(7));

    let t1 = &cfg.task["t1"];
    assert_eq!((t1.arrival, t1.cost, t1.deadline), (4, 2, 7));
}

#[test]
fn millis_unit_changes_the_granularity() {
    let file = write_config(
        r#"
[settings]
time_unit = "millis"

[task.a]
arrival = 0
cost = 250
deadline = 400
"#,
    );

    let cfg = load_and_validate(file.path()).expect("valid config");
    assert_eq!(cfg.settings.duration(250), Duration::from_millis(250));
}

#[test]
fn rejects_zero_cost() {
    let file = write_config("[task.a]\narrival = 0\ncost = 0\ndeadline = 4\n");

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, FeasrunError::ConfigError(_)), "got {err:?}");
}

#[test]
fn rejects_arrival_at_or_after_deadline() {
    let file = write_config("[task.a]\narrival = 4\ncost = 1\ndeadline = 4\n");

    assert!(load_and_validate(file.path()).is_err());
}

#[test]
fn rejects_an_empty_task_table() {
    let file = write_config("[settings]\ntime_unit = \"seconds\"\n");

    assert!(load_and_validate(file.path()).is_err());
}

#[test]
fn rejects_malformed_toml() {
    let file = write_config("not toml ===");

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, FeasrunError::TomlError(_)), "got {err:?}");
}

#[test]
fn builder_validation_matches_the_loader() {
    // The builder's raw form goes through the same TryFrom gate as files.
    let bad = TaskSetFileBuilder::new().with_task("a", 5, 1, 5).build_raw();
    assert!(TaskSetFile::try_from(bad).is_err());

    let good = TaskSetFileBuilder::new().with_task("a", 1, 2, 5).build();
    assert_eq!(good.task["a"].cost, 2);
}
