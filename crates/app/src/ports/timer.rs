//! Timer port: lets the poller wait without picking an async runtime.

use std::future::Future;
use std::time::Duration;

/// Completes after roughly `duration`.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
