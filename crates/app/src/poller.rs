//! Repeating poll timer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::ports::Runtime;

/// Fires a tick callback every `interval` until stopped.
///
/// Each [`start`](Self::start) bumps a generation counter; a timer loop
/// exits as soon as it wakes up under a newer generation, so at most one
/// loop ever ticks. Dropping the poller stops it.
pub struct Poller<R: Runtime> {
    runtime: R,
    interval: Duration,
    tick: Rc<dyn Fn()>,
    generation: Rc<Cell<u64>>,
    running: Cell<bool>,
}

impl<R: Runtime> Poller<R> {
    pub fn new(runtime: R, interval: Duration, tick: impl Fn() + 'static) -> Self {
        Self {
            runtime,
            interval,
            tick: Rc::new(tick),
            generation: Rc::new(Cell::new(0)),
            running: Cell::new(false),
        }
    }

    /// Install the timer, replacing any timer already running.
    ///
    /// The first tick fires one interval after the call.
    pub fn start(&self) {
        self.stop();

        let generation = Rc::clone(&self.generation);
        let current = generation.get();
        let tick = Rc::clone(&self.tick);
        let runtime = self.runtime.clone();
        let interval = self.interval;

        self.runtime.spawn(async move {
            loop {
                runtime.sleep(interval).await;
                if generation.get() != current {
                    break;
                }
                tick();
            }
        });
        self.running.set(true);
        tracing::debug!(?interval, "poller started");
    }

    /// Cancel the timer. In-flight polls are left to finish.
    pub fn stop(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if self.running.replace(false) {
            tracing::debug!("poller stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl<R: Runtime> Drop for Poller<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestRuntime;
    use tokio::task::LocalSet;

    fn counting_poller(interval_ms: u64) -> (Poller<TestRuntime>, Rc<Cell<u32>>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let poller = Poller::new(TestRuntime, Duration::from_millis(interval_ms), move || {
            counter.set(counter.get() + 1);
        });
        (poller, ticks)
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_tick_once_per_interval() {
        LocalSet::new()
            .run_until(async {
                let (poller, ticks) = counting_poller(500);
                poller.start();

                advance(1_250).await;
                assert_eq!(ticks.get(), 2);
                assert!(poller.is_running());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_double_tick_when_started_twice() {
        LocalSet::new()
            .run_until(async {
                let (poller, ticks) = counting_poller(500);
                poller.start();
                advance(100).await;
                poller.start();

                advance(1_050).await;
                assert_eq!(ticks.get(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_ticking_after_stop() {
        LocalSet::new()
            .run_until(async {
                let (poller, ticks) = counting_poller(500);
                poller.start();
                advance(600).await;
                poller.stop();

                advance(2_000).await;
                assert_eq!(ticks.get(), 1);
                assert!(!poller.is_running());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_ticking_when_dropped() {
        LocalSet::new()
            .run_until(async {
                let (poller, ticks) = counting_poller(500);
                poller.start();
                drop(poller);

                advance(2_000).await;
                assert_eq!(ticks.get(), 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_resume_after_restart() {
        LocalSet::new()
            .run_until(async {
                let (poller, ticks) = counting_poller(200);
                poller.start();
                poller.stop();
                poller.start();

                advance(450).await;
                assert_eq!(ticks.get(), 2);
            })
            .await;
    }
}
