//! Deferred one-shot work.
//!
//! The broadcaster never cancels a scheduled task; stale dismisses are
//! recognised by generation when they fire. A scheduler therefore only needs
//! "run this later", which any timer facility can provide.

use std::time::Duration;
use tokio::runtime::{Handle, TryCurrentError};

pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Runs `task` once, no earlier than `delay` from now.
    fn defer(&self, delay: Duration, task: Task);
}

/// Runs deferred tasks on a tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime the caller is running on.
    ///
    /// # Errors
    /// Returns an error when called outside a tokio runtime.
    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn defer(&self, delay: Duration, task: Task) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
