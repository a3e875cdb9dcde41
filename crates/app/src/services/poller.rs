//! Run-state poller: keeps card styling and start/stop controls current.
//!
//! The poller fetches immediately, then once per interval. Ticks are
//! independent: a failed fetch is reported to the callback and the loop
//! keeps going. Nothing orders overlapping responses; the dashboard settles
//! on whatever the controller reported last.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use futures::future::{AbortHandle, abortable};
use irrigo_domain::run_state::RunState;

use crate::ports::{ApiError, ControllerApi, Sleeper};

/// Default gap between two run-state fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Cancels a running poll task. Cloneable so teardown hooks can each hold one.
#[derive(Debug, Clone)]
pub struct PollHandle {
    abort: AbortHandle,
}

impl PollHandle {
    /// Stop polling. The task finishes at its next await point.
    pub fn cancel(&self) {
        if !self.abort.is_aborted() {
            tracing::debug!("run-state polling cancelled");
        }
        self.abort.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Periodic run-state fetcher.
pub struct StatePoller<A, S> {
    api: A,
    sleeper: S,
    interval: Duration,
}

impl<A: ControllerApi, S: Sleeper> StatePoller<A, S> {
    /// Create a poller that waits `interval` between fetches.
    pub fn new(api: A, sleeper: S, interval: Duration) -> Self {
        Self {
            api,
            sleeper,
            interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Poll until `on_tick` breaks.
    ///
    /// `on_tick` sees every result, successful or not.
    pub async fn run<F>(&self, mut on_tick: F)
    where
        F: FnMut(Result<RunState, ApiError>) -> ControlFlow<()>,
    {
        loop {
            let result = self.api.fetch_run_state().await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "run-state poll failed");
            }
            if on_tick(result).is_break() {
                tracing::debug!("run-state polling stopped by callback");
                return;
            }
            self.sleeper.sleep(self.interval).await;
        }
    }

    /// Turn the poller into a task plus a handle that cancels it.
    ///
    /// The caller spawns the task on whatever executor it has.
    pub fn start<F>(self, on_tick: F) -> (PollHandle, impl Future<Output = ()>)
    where
        F: FnMut(Result<RunState, ApiError>) -> ControlFlow<()>,
    {
        let interval = self.interval;
        let (task, abort) = abortable(async move { self.run(on_tick).await });
        tracing::debug!(interval_ms = interval.as_millis(), "run-state polling started");
        let task = async move {
            let _ = task.await;
        };
        (PollHandle { abort }, task)
    }
}
