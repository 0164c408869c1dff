// src/exec/state.rs

//! Per-slot supervision states.

/// Supervision state of one slot, as observed by the controlling flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Waiting for the slot's scheduled start offset.
    Pending,
    /// The slot's activity has been spawned; its work may still be sleeping
    /// until the start offset or already executing.
    Running,
    /// The completion signal arrived at or before the slot's finish bound.
    Completed,
    /// No completion signal by the finish bound; the run is aborted.
    Missed,
}
