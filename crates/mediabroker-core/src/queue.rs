//! Execution-queue handle forwarded to backend modules.

use std::fmt;
use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A scheduling target for encoder work.
///
/// The broker treats the queue as opaque: it forwards it to whichever
/// backend module wins the fallback chain and never schedules onto it
/// itself. The created encoder is bound to this queue for its setup and
/// per-frame work.
#[derive(Clone)]
pub struct TaskQueue {
    handle: Handle,
    label: &'static str,
}

impl TaskQueue {
    /// Creates a queue backed by the given runtime handle.
    pub fn new(handle: Handle, label: &'static str) -> Self {
        Self { handle, label }
    }

    /// Creates a queue backed by the runtime of the calling context.
    ///
    /// Panics when called outside a tokio runtime, like
    /// [`Handle::current`].
    pub fn current(label: &'static str) -> Self {
        Self::new(Handle::current(), label)
    }

    /// The diagnostic label this queue was created with.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Schedule work onto the queue.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue").field("label", &self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_runs_on_queue() {
        let queue = TaskQueue::current("test");
        let value = queue.spawn(async { 21 * 2 }).await.unwrap();
        assert_eq!(value, 42);
        assert_eq!(queue.label(), "test");
    }
}
