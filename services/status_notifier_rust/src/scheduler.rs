//! Fixed-interval scheduling for the poll loop.
//!
//! The loop sleeps unconditionally between cycles, success or failure alike.
//! The policy lives behind this one type so backoff or cancellation can be
//! swapped in without touching the loop itself.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PollScheduler {
    interval: Duration,
}

impl PollScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait out one poll interval.
    pub async fn wait(&self) {
        tokio::time::sleep(self.interval).await;
    }
}
