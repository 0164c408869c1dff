#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use feasrun::config::{RawTaskSetFile, SettingsSection, TaskSetFile, TaskTimingConfig, TimeUnit};
use feasrun::task::{Task, WorkFn, WorkRef};

/// Work unit that returns immediately; for search-only tests.
pub fn noop_work<C>() -> WorkRef<C>
where
    C: Send + Sync + 'static,
{
    WorkFn::arc(|_ctx: Arc<C>| async {})
}

/// Work unit that is busy for `busy`, then records `name` into the shared
/// log. Recording after the sleep means the log also reflects completion
/// order and whether a late activity was really joined.
pub fn recording_work(name: &str, busy: Duration) -> WorkRef<Mutex<Vec<String>>> {
    let name = name.to_string();

    WorkFn::arc(move |ctx: Arc<Mutex<Vec<String>>>| {
        let name = name.clone();
        async move {
            tokio::time::sleep(busy).await;
            ctx.lock().unwrap().push(name);
        }
    })
}

/// Work unit that dies without ever signalling completion.
pub fn panicking_work<C>() -> WorkRef<C>
where
    C: Send + Sync + 'static,
{
    WorkFn::arc(|_ctx: Arc<C>| async { panic!("work unit died") })
}

/// Builder for a [`Task`] with second-granularity timing and no-op work.
pub struct TaskBuilder {
    name: String,
    arrival: Duration,
    cost: Duration,
    deadline: Duration,
}

impl TaskBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arrival: Duration::ZERO,
            cost: Duration::from_secs(1),
            deadline: Duration::from_secs(10),
        }
    }

    pub fn arrival_secs(mut self, secs: u64) -> Self {
        self.arrival = Duration::from_secs(secs);
        self
    }

    pub fn cost_secs(mut self, secs: u64) -> Self {
        self.cost = Duration::from_secs(secs);
        self
    }

    pub fn deadline_secs(mut self, secs: u64) -> Self {
        self.deadline = Duration::from_secs(secs);
        self
    }

    pub fn build<C>(self) -> Task<C>
    where
        C: Send + Sync + 'static,
    {
        let work = noop_work();
        self.build_with(work)
    }

    pub fn build_with<C>(self, work: WorkRef<C>) -> Task<C> {
        Task::new(self.name, self.arrival, self.cost, self.deadline, work)
    }
}

/// Shorthand used all over the search tests.
pub fn task_secs<C>(name: &str, arrival: u64, cost: u64, deadline: u64) -> Task<C>
where
    C: Send + Sync + 'static,
{
    TaskBuilder::new(name)
        .arrival_secs(arrival)
        .cost_secs(cost)
        .deadline_secs(deadline)
        .build()
}

/// Builder for `TaskSetFile` to simplify config-layer tests.
pub struct TaskSetFileBuilder {
    raw: RawTaskSetFile,
}

impl TaskSetFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawTaskSetFile {
                settings: SettingsSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn time_unit(mut self, unit: TimeUnit) -> Self {
        self.raw.settings.time_unit = unit;
        self
    }

    pub fn with_task(mut self, name: &str, arrival: u64, cost: u64, deadline: u64) -> Self {
        self.raw.task.insert(
            name.to_string(),
            TaskTimingConfig {
                arrival,
                cost,
                deadline,
            },
        );
        self
    }

    /// Validated task-set file; panics if the builder produced invalid data.
    pub fn build(self) -> TaskSetFile {
        TaskSetFile::try_from(self.raw).expect("builder produced an invalid task-set file")
    }

    /// The raw, unvalidated form, for tests exercising validation itself.
    pub fn build_raw(self) -> RawTaskSetFile {
        self.raw
    }
}

impl Default for TaskSetFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
