// src/exec/executor.rs

//! The supervising control flow that replays one schedule in real time.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::exec::state::SlotState;
use crate::sched::Schedule;

/// Terminal status of one executor run.
///
/// There is no partial-result payload: a single missed deadline fails the
/// whole run, and re-selection among the remaining feasible schedules is
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every task completed at or before its computed finish bound.
    Success,
    /// Some task had not completed by its finish bound; the run was aborted
    /// and later tasks were never started.
    Failure,
}

/// Execute `schedule` against the shared context, enforcing each slot's
/// finish bound against the wall clock.
///
/// Slots are supervised strictly in schedule order: slot `i + 1`'s activity
/// is not spawned until slot `i` has resolved, so at most one work unit is
/// in flight in the intended usage. Each slot runs as its own activity that
/// sleeps until its start offset, runs the work, and signals completion;
/// the supervisor waits on that signal no longer than the slot's finish
/// bound. On a miss the run is aborted immediately, but the late activity
/// is still joined — with no bound on the join — so no unsupervised
/// activity outlives this call.
pub async fn execute<C>(ctx: Arc<C>, schedule: &Schedule<C>) -> RunStatus
where
    C: Send + Sync + 'static,
{
    let run_start = Instant::now();
    info!(slots = schedule.len(), "starting supervised run");

    for (index, slot) in schedule.iter().enumerate() {
        let mut state = SlotState::Pending;
        debug!(
            task = %slot.task.name,
            index,
            ?state,
            start = ?slot.start,
            finish = ?slot.finish,
            "supervising slot"
        );

        let (done_tx, done_rx) = oneshot::channel::<()>();
        let work = Arc::clone(&slot.task.work);
        let work_ctx = Arc::clone(&ctx);
        let start_at = run_start + slot.start;

        let activity = tokio::spawn(async move {
            time::sleep_until(start_at).await;
            work.run(work_ctx).await;
            let _ = done_tx.send(());
        });

        state = SlotState::Running;
        debug!(task = %slot.task.name, index, ?state, "slot activity spawned");

        // A dropped sender (the work died without ever signalling) counts
        // exactly like a slow task: the completion signal never arrived.
        let finish_bound = run_start + slot.finish;
        let completed = matches!(time::timeout_at(finish_bound, done_rx).await, Ok(Ok(())));

        if !completed {
            state = SlotState::Missed;
            warn!(task = %slot.task.name, index, ?state, "deadline missed; aborting run");

            // The late activity is joined rather than detached; its result
            // is discarded. The join itself has no timeout.
            let _ = activity.await;
            return RunStatus::Failure;
        }

        state = SlotState::Completed;
        // The activity has already signalled; reap it before moving on.
        let _ = activity.await;
        debug!(task = %slot.task.name, index, ?state, "slot completed in time");
    }

    info!(slots = schedule.len(), "all slots completed in time");
    RunStatus::Success
}
