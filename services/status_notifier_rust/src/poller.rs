//! Driver loop for the status watcher.
//!
//! One cycle: fetch -> validate -> format the latest record -> notify when the
//! message changed -> advance the poll window from the server clock. Failures
//! anywhere in the cycle are caught in `handle_cycle`, reported through the
//! same notification channel, and the loop carries on.

use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;

use hwwatch_rust_core::clients::PracticumClient;
use hwwatch_rust_core::WatchError;

use crate::formatters;
use crate::payload;

/// Where poll cycles get their payloads from.
#[async_trait]
pub trait StatusSource {
    async fn fetch_statuses(&self, since: i64) -> Result<Value, WatchError>;
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, since: i64) -> Result<Value, WatchError> {
        self.homework_statuses(since).await
    }
}

/// Where poll cycles deliver their messages to.
#[async_trait]
pub trait MessageSink {
    async fn send(&self, text: &str) -> Result<(), WatchError>;
}

/// The only state that survives between cycles. In memory only; a restarted
/// process starts a fresh window.
#[derive(Debug, Clone)]
pub struct PollState {
    pub last_timestamp: i64,
    pub last_message: Option<String>,
}

impl PollState {
    pub fn new(last_timestamp: i64) -> Self {
        Self {
            last_timestamp,
            last_message: None,
        }
    }
}

/// Run one poll cycle, returning the first typed failure encountered.
pub async fn run_cycle<S, N>(
    state: &mut PollState,
    source: &S,
    sink: &N,
) -> Result<(), WatchError>
where
    S: StatusSource + Sync,
    N: MessageSink + Sync,
{
    let payload = source.fetch_statuses(state.last_timestamp).await?;
    let homeworks = payload::check_payload(&payload)?;

    // Only the most recent submission is examined; older entries are ignored.
    if let Some(latest) = homeworks.first() {
        let message = formatters::status_change(latest)?;
        if state.last_message.as_deref() != Some(message.as_str()) {
            // Delivery failures stop at the notifier boundary: logged, never
            // allowed to crash the cycle or trigger a failure notification.
            if let Err(err) = sink.send(&message).await {
                error!("Failed to deliver status notification: {err}");
            }
            state.last_message = Some(message);
        } else {
            debug!("Latest submission status unchanged, not re-notifying");
        }
    } else {
        debug!("No new homework statuses in the response");
    }

    state.last_timestamp = payload::server_clock(&payload)?;
    Ok(())
}

/// Top-level catch around one cycle: log the failure, make one best-effort
/// attempt to report it to the chat, and return so the loop can sleep.
pub async fn handle_cycle<S, N>(state: &mut PollState, source: &S, sink: &N)
where
    S: StatusSource + Sync,
    N: MessageSink + Sync,
{
    if let Err(err) = run_cycle(state, source, sink).await {
        let message = formatters::cycle_failure(&err);
        error!("{message}");
        if let Err(send_err) = sink.send(&message).await {
            error!("Failed to send failure notification: {send_err}");
        }
    }
}
