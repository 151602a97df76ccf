//! Shape checks for the homework API payload.

use serde_json::Value;

use homework_common::error::WatchError;
use homework_common::types::HomeworkRecord;

/// Validate the payload and return its `homeworks` list as-is.
///
/// The list may be empty; deciding what an empty list means is up to the caller.
pub fn validate(payload: &Value) -> Result<Vec<HomeworkRecord>, WatchError> {
    let object = payload.as_object().ok_or_else(|| {
        WatchError::TypeMismatch(format!(
            "API response is not an object: {}",
            json_type(payload)
        ))
    })?;

    let homeworks = match object.get("homeworks") {
        None => return Err(WatchError::MissingField("homeworks")),
        Some(Value::Null) => return Err(WatchError::EmptyPayload),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(WatchError::TypeMismatch(format!(
                "`homeworks` is not a list: {}",
                json_type(other)
            )));
        }
    };

    homeworks
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(HomeworkRecord::from(fields.clone())),
            other => Err(WatchError::TypeMismatch(format!(
                "`homeworks[{index}]` is not an object: {}",
                json_type(other)
            ))),
        })
        .collect()
}

/// Server-supplied timestamp for the next poll window, if any.
pub fn current_date(payload: &Value) -> Option<i64> {
    payload.get("current_date").and_then(Value::as_i64)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
