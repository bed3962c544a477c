use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

use hwwatch_rust_core::clients::practicum::DEFAULT_ENDPOINT;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub practicum_endpoint: String,

    pub telegram_bot_token: String,
    pub telegram_chat_id: String,

    pub poll_interval: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let practicum_endpoint =
            env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let telegram_bot_token = require_env("TELEGRAM_BOT_TOKEN")?;
        let telegram_chat_id = require_env("TELEGRAM_CHAT_ID")?;

        let poll_interval =
            Duration::from_secs(parse_u64_env("POLL_INTERVAL_SECS", 600).context("POLL_INTERVAL_SECS")?);
        let http_timeout =
            Duration::from_secs(parse_u64_env("HTTP_TIMEOUT_SECS", 10).context("HTTP_TIMEOUT_SECS")?);

        Ok(Self {
            practicum_token,
            practicum_endpoint,
            telegram_bot_token,
            telegram_chat_id,
            poll_interval,
            http_timeout,
        })
    }
}

// Missing and empty are treated the same: both mean the watcher cannot run.
fn require_env(key: &str) -> Result<String> {
    let raw = env::var(key).with_context(|| format!("{key} must be set"))?;
    let val = raw.trim().to_string();
    if val.is_empty() {
        bail!("{key} must not be empty");
    }
    Ok(val)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse::<u64>()
        .with_context(|| format!("Invalid {key}: {raw} (expected integer seconds)"))
}
