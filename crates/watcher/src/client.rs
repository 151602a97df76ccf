use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use homework_common::error::WatchError;

/// Headers as they appear in diagnostics; the token itself is never printed.
const REDACTED_HEADERS: &str = "{Authorization: OAuth <redacted>}";

/// Anything that can answer "what changed since `from_date`?".
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, WatchError>;
}

/// HTTP client for the homework status endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    fn transport_error(&self, from_date: i64, reason: impl ToString) -> WatchError {
        WatchError::Transport {
            endpoint: self.endpoint.clone(),
            headers: REDACTED_HEADERS.to_string(),
            from_date,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, WatchError> {
        tracing::info!(url = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.transport_error(from_date, e))?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Response received from homework API");

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(from_date, e))?;

        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "Homework API returned unexpected status");
            return Err(WatchError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| WatchError::MalformedResponse(e.to_string()))
    }
}
