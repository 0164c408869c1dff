// src/task/work.rs

//! The capability interface for a task's payload.
//!
//! The scheduler never interprets what a task does; it only needs a way to
//! start the payload and learn that it returned. [`Work`] is that seam:
//! production code and tests alike implement it directly or wrap a closure
//! in [`WorkFn`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by [`Work::run`].
pub type BoxWorkFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Shared handle to a task's payload.
pub type WorkRef<C> = Arc<dyn Work<C>>;

/// A unit of work operating on a shared context.
///
/// The context is handed over as an `Arc`; the executor provides no locking,
/// so any interior-mutability discipline belongs to the caller.
pub trait Work<C>: Send + Sync + 'static {
    /// Produce a fresh future performing the task's work.
    fn run(&self, ctx: Arc<C>) -> BoxWorkFuture;
}

/// Function-backed [`Work`] implementation.
///
/// Wraps a closure that creates a new future per invocation.
pub struct WorkFn<F> {
    f: F,
}

impl<F> WorkFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Create the work unit and return it as a shared handle.
    pub fn arc<C>(f: F) -> WorkRef<C>
    where
        Self: Work<C>,
    {
        Arc::new(Self::new(f))
    }
}

impl<C, F, Fut> Work<C> for WorkFn<F>
where
    C: Send + Sync + 'static,
    F: Fn(Arc<C>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn run(&self, ctx: Arc<C>) -> BoxWorkFuture {
        Box::pin((self.f)(ctx))
    }
}
