// src/lib.rs

pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod sched;
pub mod task;

use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::demo::{DemoContext, demo_task_set, demo_work};
use crate::errors::FeasrunError;
use crate::exec::{RunStatus, execute};
use crate::sched::{Schedule, feasible_schedules};
use crate::task::Task;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task-set assembly (TOML file, or the built-in demo set)
/// - schedule enumeration + pruning
/// - schedule selection
/// - the deadline-monitored executor
pub async fn run(args: CliArgs) -> Result<()> {
    let tasks = match &args.config {
        Some(path) => tasks_from_config(path)?,
        None => {
            debug!("no task-set file given; using the built-in demo set");
            demo_task_set()
        }
    };

    info!(tasks = tasks.len(), "searching for feasible schedules");
    let schedules = feasible_schedules(&tasks);
    print_schedules(&schedules);

    if args.list {
        return Ok(());
    }

    if schedules.is_empty() {
        bail!("no feasible schedule exists for this task set");
    }

    let schedule = schedules
        .get(args.schedule)
        .ok_or(FeasrunError::ScheduleIndex {
            index: args.schedule,
            count: schedules.len(),
        })?;

    info!(index = args.schedule, "executing selected schedule");
    let ctx = Arc::new(DemoContext::default());

    let status = execute(Arc::clone(&ctx), schedule).await;
    debug!(executed = ?ctx.executed(), "demo work completed");

    match status {
        RunStatus::Success => {
            println!("SUCCESS");
            Ok(())
        }
        RunStatus::Failure => {
            println!("FAILURE");
            bail!("run aborted: a task missed its deadline")
        }
    }
}

/// Build the task set from a TOML file, attaching the demo workload to each
/// entry (the file only describes timing).
fn tasks_from_config(path: &str) -> errors::Result<Vec<Task<DemoContext>>> {
    let cfg = load_and_validate(path)?;

    Ok(cfg
        .task
        .iter()
        .map(|(name, timing)| {
            let cost = cfg.settings.duration(timing.cost);
            Task::new(
                name.clone(),
                cfg.settings.duration(timing.arrival),
                cost,
                cfg.settings.duration(timing.deadline),
                demo_work(name, cost),
            )
        })
        .collect())
}

/// Print the feasible schedules, one line each, to stdout.
fn print_schedules(schedules: &[Schedule<DemoContext>]) {
    println!("feasible schedules: {}", schedules.len());

    for (index, schedule) in schedules.iter().enumerate() {
        let line = schedule
            .iter()
            .map(|slot| format!("{} [{:?} -> {:?}]", slot.task.name, slot.start, slot.finish))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {index}: {line}");
    }
}
