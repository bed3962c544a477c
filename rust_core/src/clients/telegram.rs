use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::errors::WatchError;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Minimal Telegram Bot API client: one method, `sendMessage`.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    pub fn new(token: String, timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_API_BASE.to_string(), token, timeout)
    }

    pub fn with_base_url(base_url: String, token: String, timeout: Duration) -> Self {
        Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            token,
        }
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), WatchError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.token
        );
        let body = SendMessageRequest { chat_id, text };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WatchError::Delivery(format!("Telegram API request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WatchError::Delivery(format!(
                "Telegram API non-2xx: {status} body={body}"
            )));
        }
        Ok(())
    }
}
