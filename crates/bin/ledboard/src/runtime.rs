//! Tokio-backed [`Runtime`]. Must be used inside a `LocalSet`.

use std::future::Future;
use std::time::Duration;

use ledboard_app::ports::Runtime;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        tokio::time::sleep(duration)
    }
}
