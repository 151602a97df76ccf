use thiserror::Error;

/// Every failure the watcher can run into, from startup to delivery.
///
/// `Config` is fatal and only ever returned before the polling loop starts.
/// `Delivery` is produced by chat senders and swallowed by the notifier.
/// Everything else is caught at the loop boundary and reported to the chat.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Configuration error: missing required environment variables: {}", .missing.join(", "))]
    Config { missing: Vec<&'static str> },

    #[error("Invalid configuration value for {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    #[error(
        "Network failure: {reason}, url={endpoint}, headers={headers}, params=from_date={from_date}"
    )]
    Transport {
        endpoint: String,
        headers: String,
        from_date: i64,
        reason: String,
    },

    #[error("Unexpected response status: {status}, reason: {reason}, body: {body}")]
    UnexpectedStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Empty payload: `homeworks` is null")]
    EmptyPayload,

    #[error("Missing field `{0}` in API response")]
    MissingField(&'static str),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}
