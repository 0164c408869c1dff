// src/sched/mod.rs

//! Feasibility search over task orderings.
//!
//! - [`placement`] decides where a task lands when started at or after a
//!   given time, and whether that placement holds its deadline.
//! - [`enumerate`] walks every ordering of the task set, abandoning a
//!   branch as soon as a prefix task misses its deadline.
//! - [`prune`] keeps only the branches that scheduled the whole set.
//! - [`schedule`] defines the output containers.

pub mod enumerate;
pub mod placement;
pub mod prune;
pub mod schedule;

pub use enumerate::{Branch, enumerate};
pub use placement::{Placement, place};
pub use prune::prune;
pub use schedule::{Schedule, Slot};

use crate::task::Task;

/// Enumerate and prune in one step: every feasible complete ordering of
/// `tasks`, in enumeration order.
///
/// An empty result means no ordering of this task set meets all deadlines.
/// That is a reportable outcome for the caller to check, not an error.
pub fn feasible_schedules<C>(tasks: &[Task<C>]) -> Vec<Schedule<C>> {
    prune(enumerate(tasks), tasks.len())
}
