use serde_json::Value;

use hwwatch_rust_core::models::HomeworkRecord;
use hwwatch_rust_core::WatchError;

/// Build the status-change message for one raw homework record.
///
/// Pure function: field and status problems surface as `MissingField`, a good
/// record becomes the fixed template filled with name and verdict.
pub fn status_change(raw: &Value) -> Result<String, WatchError> {
    let record = HomeworkRecord::from_value(raw)?;
    Ok(format!(
        "Status changed for submission \"{}\". {}",
        record.homework_name,
        record.status.verdict()
    ))
}

/// Message sent through the same channel when a poll cycle fails.
pub fn cycle_failure(err: &WatchError) -> String {
    format!("Status watcher failure: {err}")
}
