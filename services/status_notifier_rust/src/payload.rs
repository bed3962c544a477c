//! Shape gate for the review API payload.
//!
//! The fetcher only guarantees "valid JSON"; everything downstream assumes an
//! object with a `homeworks` array and a `current_date` clock. This module is
//! the single place that checks it.

use serde_json::Value;

use hwwatch_rust_core::WatchError;

/// Validate the decoded payload and hand back the `homeworks` array unchanged.
pub fn check_payload(payload: &Value) -> Result<&Vec<Value>, WatchError> {
    let map = payload
        .as_object()
        .ok_or_else(|| WatchError::Shape("response is not a JSON object".to_string()))?;

    if !map.contains_key("homeworks") || !map.contains_key("current_date") {
        return Err(WatchError::Shape(
            "response is missing the homeworks/current_date keys".to_string(),
        ));
    }

    map["homeworks"]
        .as_array()
        .ok_or_else(|| WatchError::Shape("homeworks is not a list".to_string()))
}

/// Read the server-side clock out of a payload that already passed
/// `check_payload`. The remote clock is authoritative for the next poll
/// window, so a non-integer value is a shape failure, not a fallback.
pub fn server_clock(payload: &Value) -> Result<i64, WatchError> {
    payload
        .get("current_date")
        .and_then(Value::as_i64)
        .ok_or_else(|| WatchError::Shape("current_date is not an integer".to_string()))
}
