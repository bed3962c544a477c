//! Review API client
//!
//! Fetches homework review statuses newer than a given unix timestamp. The
//! endpoint answers with `{"homeworks": [...], "current_date": <unix secs>}`;
//! shape validation of that payload belongs to the caller.

use chrono::Utc;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::errors::WatchError;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(token: String, timeout: Duration) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), token, timeout)
    }

    /// Point the client at a non-default endpoint (test servers, staging).
    pub fn with_endpoint(endpoint: String, token: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            token,
        }
    }

    /// Fetch raw review statuses registered since `from_date`.
    ///
    /// A zero or negative `from_date` falls back to the current time, so a
    /// fresh process only sees submissions reviewed after it started.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        let from_date = if from_date > 0 {
            from_date
        } else {
            Utc::now().timestamp()
        };

        debug!("Fetching homework statuses since {}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| WatchError::Transport { source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WatchError::EndpointUnavailable { status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| WatchError::Transport { source })?;

        serde_json::from_str(&body).map_err(|source| WatchError::Decode { source })
    }
}
