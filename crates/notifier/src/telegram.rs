use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use homework_common::error::WatchError;

use crate::ChatSender;

/// Delivers messages through the Telegram Bot API `sendMessage` method.
pub struct TelegramSender {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

/// Envelope every Bot API response is wrapped in.
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramSender {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.token
        )
    }
}

#[async_trait]
impl ChatSender for TelegramSender {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), WatchError> {
        let body = json!({
            "chat_id": chat_id,
            "text": text,
        });

        // reqwest errors carry the URL, which embeds the bot token.
        let response = self
            .client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| WatchError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        match serde_json::from_str::<BotApiResponse>(&text) {
            Ok(reply) if status.is_success() && reply.ok => Ok(()),
            Ok(reply) => Err(WatchError::Delivery(format!(
                "Telegram API returned {}: {}",
                status,
                reply.description.unwrap_or(text)
            ))),
            Err(_) => Err(WatchError::Delivery(format!(
                "Telegram API returned {}: {}",
                status, text
            ))),
        }
    }
}
