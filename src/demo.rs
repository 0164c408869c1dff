// src/demo.rs

//! Built-in demonstration task set and workload.
//!
//! Used by the CLI when no task-set file is given: four tasks whose timing
//! admits more than one feasible ordering. Each work unit records its run
//! into the shared context and burns slightly less than its cost, so a
//! healthy run finishes every task inside its window.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::task::{Task, WorkFn, WorkRef};

/// Margin subtracted from a task's cost when the demo workload sleeps, so
/// the work reliably returns inside its window.
const WORK_MARGIN: Duration = Duration::from_millis(100);

/// Shared context for the demo workload: names of the tasks that ran, in
/// completion order.
#[derive(Debug, Default)]
pub struct DemoContext {
    executed: Mutex<Vec<String>>,
}

impl DemoContext {
    /// Names of the tasks that have completed so far.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.executed.lock().unwrap().push(name.to_string());
    }
}

/// Demo work unit: busy for `cost` minus a margin, then record the run.
pub fn demo_work(name: &str, cost: Duration) -> WorkRef<DemoContext> {
    let name = name.to_string();

    WorkFn::arc(move |ctx: Arc<DemoContext>| {
        let name = name.clone();
        async move {
            info!(task = %name, "executing demo work");
            sleep(cost.saturating_sub(WORK_MARGIN)).await;
            ctx.record(&name);
        }
    })
}

/// The built-in sample task set used when no config file is supplied.
pub fn demo_task_set() -> Vec<Task<DemoContext>> {
    [
        ("t1", 4, 2, 7),
        ("t2", 1, 1, 5),
        ("t3", 1, 2, 6),
        ("t4", 0, 2, 4),
    ]
    .into_iter()
    .map(|(name, arrival, cost, deadline)| {
        let cost = Duration::from_secs(cost);
        Task::new(
            name,
            Duration::from_secs(arrival),
            cost,
            Duration::from_secs(deadline),
            demo_work(name, cost),
        )
    })
    .collect()
}
