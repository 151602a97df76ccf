use std::fmt;
use std::time::Duration;

use crate::error::WatchError;

/// Homework status endpoint of the review API.
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Seconds to wait between two polls.
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;

/// Names of the secrets that must be present before the loop may start.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives status notifications
    pub telegram_chat_id: String,

    /// Homework status endpoint (default: the Practicum API)
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Wait between polls in seconds (default: 600)
    pub retry_time_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` first.
    pub fn from_env() -> Result<Self, WatchError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Every missing or blank secret is logged by name, then all of them are
    /// reported together in a single [`WatchError::Config`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|name| read(*name).is_none())
            .collect();

        if !missing.is_empty() {
            for name in &missing {
                tracing::error!(variable = *name, "Required environment variable is missing");
            }
            return Err(WatchError::Config { missing });
        }

        let retry_time_secs = match read("RETRY_TIME_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| WatchError::InvalidConfig {
                name: "RETRY_TIME_SECS",
                reason: format!("expected a whole number of seconds, got {raw:?}"),
            })?,
            None => DEFAULT_RETRY_TIME_SECS,
        };

        Ok(Self {
            practicum_token: read("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: read("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: read("TELEGRAM_CHAT_ID").unwrap_or_default(),
            practicum_endpoint: read("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: read("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_time_secs,
        })
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_time_secs)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_time_secs", &self.retry_time_secs)
            .finish()
    }
}
