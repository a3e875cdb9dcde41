//! Browser timer for the run-state poller.

use std::future::Future;
use std::time::Duration;

use irrigo_app::ports::Sleeper;

/// Waits on a `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
