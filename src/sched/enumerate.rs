// src/sched/enumerate.rs

//! Rotation-based branch-and-bound enumeration of task orderings.
//!
//! The search walks the tree of partial orderings depth-first. At every node
//! each not-yet-scheduled task gets one turn as the candidate to run next;
//! the candidate is validated *before* its subtree is entered, so an
//! infeasible prefix never spawns descendants. Exhaustive in the worst case
//! (O(n!) branches), which is inherent to the problem; the early validation
//! is what makes typical task sets cheap.

use std::time::Duration;

use tracing::debug;

use crate::sched::placement::place;
use crate::sched::schedule::Slot;
use crate::task::Task;

/// Outcome of exploring one branch of the search tree.
///
/// A dead branch is an explicit variant rather than an empty sequence so
/// that "no tasks to schedule" (a valid empty ordering) can never be
/// confused with "a prefix task missed its deadline".
pub enum Branch<C> {
    /// Every task along this branch fit; slots are in execution order.
    Feasible(Vec<Slot<C>>),
    /// The branch head could not meet its deadline; no ordering below this
    /// node can be feasible.
    Dead,
}

impl<C> std::fmt::Debug for Branch<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Feasible(slots) => f.debug_tuple("Feasible").field(slots).finish(),
            Branch::Dead => write!(f, "Dead"),
        }
    }
}

/// Walk every ordering of `tasks` from time zero.
///
/// The raw output holds one entry per explored branch — feasible complete
/// orderings and dead markers, in emission order. Feed it to
/// [`prune`](crate::sched::prune::prune) to obtain the final schedules.
///
/// Candidates are tried in caller-supplied order; no implicit tie-break by
/// deadline or arrival is applied.
pub fn enumerate<C>(tasks: &[Task<C>]) -> Vec<Branch<C>> {
    let branches = branches_from(Duration::ZERO, tasks.to_vec());

    debug!(
        tasks = tasks.len(),
        branches = branches.len(),
        "enumeration explored the full ordering tree"
    );

    branches
}

/// Recursive search over (current time, remaining tasks).
///
/// Each remaining task serves as the head candidate exactly once: the head
/// is validated, then the list is rotated (head to tail) to expose the next
/// sibling. A feasible head contributes its slot prepended to every
/// completion of the rest starting at the head's finish time; an infeasible
/// head contributes a single dead marker and its subtree is never entered.
fn branches_from<C>(now: Duration, mut remaining: Vec<Task<C>>) -> Vec<Branch<C>> {
    if remaining.is_empty() {
        // Zero tasks schedule trivially.
        return vec![Branch::Feasible(Vec::new())];
    }

    let mut out = Vec::new();

    for _ in 0..remaining.len() {
        let head = &remaining[0];
        let placement = place(now, head);

        if placement.feasible {
            let slot = Slot {
                task: head.clone(),
                start: placement.start,
                finish: placement.finish,
            };

            for completion in branches_from(placement.finish, remaining[1..].to_vec()) {
                out.push(match completion {
                    Branch::Feasible(mut slots) => {
                        slots.insert(0, slot.clone());
                        Branch::Feasible(slots)
                    }
                    Branch::Dead => Branch::Dead,
                });
            }
        } else {
            out.push(Branch::Dead);
        }

        remaining.rotate_left(1);
    }

    out
}
