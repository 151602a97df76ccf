use serde_json::Value;

use homework_common::error::WatchError;
use homework_common::types::{HomeworkRecord, ReviewStatus};

/// Turn a homework record into the status-change sentence sent to the chat.
pub fn format_status(record: &HomeworkRecord) -> Result<String, WatchError> {
    let name = match record.get("homework_name") {
        None => return Err(WatchError::MissingField("homework_name")),
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(WatchError::TypeMismatch(format!(
                "`homework_name` is not a string: {other}"
            )));
        }
    };

    let status: ReviewStatus = match record.get("status") {
        None => return Err(WatchError::MissingField("status")),
        Some(Value::String(status)) => status.parse()?,
        // A status outside the table, whatever its JSON type
        Some(other) => return Err(WatchError::UnknownStatus(other.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
