// src/task/mod.rs

//! Task descriptors and their units of work.
//!
//! - [`spec`] holds the static task descriptor: timing parameters plus a
//!   handle to the payload.
//! - [`work`] defines the capability interface a task's payload implements.

pub mod spec;
pub mod work;

pub use spec::{Task, TaskName};
pub use work::{BoxWorkFuture, Work, WorkFn, WorkRef};
