use futures_util::future::BoxFuture;
use tokio::runtime::Handle;

/// Runs fire-and-forget work. Spawned tasks are never awaited or cancelled.
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, task: BoxFuture<'static, ()>);
}

/// Spawns onto a Tokio runtime
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: Handle,
}

impl TokioSpawner {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime of the calling task. Panics outside a Tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl TaskSpawner for TokioSpawner {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        // Detached, the join handle is dropped on purpose
        let _ = self.handle.spawn(task);
    }
}
