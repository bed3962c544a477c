// Shared models for the homework status watcher
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::WatchError;

// ============================================================================
// Review status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Parse a raw status code from the review API. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict bound to this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

// ============================================================================
// Homework record
// ============================================================================

/// One submission as reported by the review API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Extract a typed record from one element of the `homeworks` array.
    ///
    /// The payload shape is only guaranteed down to "array of JSON values", so
    /// field extraction happens here and failures carry the offending field.
    pub fn from_value(raw: &Value) -> Result<Self, WatchError> {
        let map = raw.as_object().filter(|m| !m.is_empty()).ok_or_else(|| {
            WatchError::MissingField("homework record is empty".to_string())
        })?;

        let homework_name = map
            .get("homework_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                WatchError::MissingField("homework_name is missing or empty".to_string())
            })?;

        let status_code = map
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let status = HomeworkStatus::from_code(status_code).ok_or_else(|| {
            WatchError::MissingField(format!("unknown status: {status_code:?}"))
        })?;

        Ok(HomeworkRecord {
            homework_name: homework_name.to_string(),
            status,
        })
    }
}
