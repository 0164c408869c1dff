// src/sched/prune.rs

//! Filtering of raw search output down to complete schedules.

use tracing::debug;

use crate::sched::enumerate::Branch;
use crate::sched::schedule::Schedule;

/// Keep exactly the feasible branches that scheduled every task.
///
/// Branches that went dead partway are shorter than `expected` (or marked
/// [`Branch::Dead`] outright) and are discarded. Emission order is
/// preserved; no further sorting is applied. An empty result reports that
/// no feasible schedule exists for this task set.
pub fn prune<C>(branches: Vec<Branch<C>>, expected: usize) -> Vec<Schedule<C>> {
    let explored = branches.len();

    let schedules: Vec<Schedule<C>> = branches
        .into_iter()
        .filter_map(|branch| match branch {
            Branch::Feasible(slots) if slots.len() == expected => Some(Schedule::new(slots)),
            _ => None,
        })
        .collect();

    debug!(
        explored,
        feasible = schedules.len(),
        "pruned enumeration output"
    );

    schedules
}
