// src/task/spec.rs

//! Static task descriptors.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::task::work::WorkRef;

/// Task names are plain strings; within one task set they are unique.
pub type TaskName = String;

/// Immutable description of one task to be scheduled.
///
/// All timing values are offsets from the start of a run, expressed in a
/// caller-selected granularity. Preconditions: `arrival < deadline` and
/// `cost > 0` (the config layer enforces them for file input; programmatic
/// construction is trusted). `arrival + cost` may well exceed `deadline`:
/// whether the task actually fits is decided contextually by the placement
/// validator, not here.
pub struct Task<C> {
    pub name: TaskName,
    /// Earliest offset at which the task may begin.
    pub arrival: Duration,
    /// Execution time the task needs once started (non-preemptive).
    pub cost: Duration,
    /// Offset by which the task's work must have finished.
    pub deadline: Duration,
    /// The payload the executor invokes.
    pub work: WorkRef<C>,
}

impl<C> Task<C> {
    pub fn new(
        name: impl Into<TaskName>,
        arrival: Duration,
        cost: Duration,
        deadline: Duration,
        work: WorkRef<C>,
    ) -> Self {
        debug_assert!(cost > Duration::ZERO, "task cost must be positive");
        debug_assert!(arrival < deadline, "task must arrive before its deadline");

        Self {
            name: name.into(),
            arrival,
            cost,
            deadline,
            work,
        }
    }
}

// Manual impls below: the work handle is an `Arc<dyn Work<C>>`, so deriving
// would wrongly demand `C: Clone` and there is no `Debug` on the payload.

impl<C> Clone for Task<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            arrival: self.arrival,
            cost: self.cost,
            deadline: self.deadline,
            work: Arc::clone(&self.work),
        }
    }
}

impl<C> fmt::Debug for Task<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("arrival", &self.arrival)
            .field("cost", &self.cost)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

/// Equality is over the descriptor (name + timing); the payload is opaque
/// and never compared.
impl<C> PartialEq for Task<C> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.arrival == other.arrival
            && self.cost == other.cost
            && self.deadline == other.deadline
    }
}

impl<C> Eq for Task<C> {}
