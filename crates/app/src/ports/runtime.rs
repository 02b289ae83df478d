//! Runtime port: task spawning and timers on a single-threaded executor.

use std::future::Future;
use std::time::Duration;

/// Local executor handle.
///
/// The browser adapter maps this to `spawn_local` and `gloo-timers`, the
/// terminal binary to a tokio `LocalSet`.
pub trait Runtime: Clone + 'static {
    /// Run `task` to completion in the background.
    fn spawn(&self, task: impl Future<Output = ()> + 'static);

    /// Resolve after `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static;
}
