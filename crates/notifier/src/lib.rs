//! Chat delivery for status notifications.
//!
//! A [`ChatSender`] pushes one text message to one chat. The [`Notifier`]
//! binds a sender to the configured destination and never lets a delivery
//! failure escape: it is logged together with the undelivered text.

pub mod telegram;

use async_trait::async_trait;

use homework_common::error::WatchError;

pub use telegram::TelegramSender;

/// A transport that can deliver a text message to a chat.
#[async_trait]
pub trait ChatSender: Send + Sync {
    /// Deliver `text` to `chat_id`. Failures are reported as [`WatchError::Delivery`].
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), WatchError>;
}

/// Sends notifications to a single fixed chat.
pub struct Notifier<S> {
    sender: S,
    chat_id: String,
}

impl<S: ChatSender> Notifier<S> {
    pub fn new(sender: S, chat_id: impl Into<String>) -> Self {
        Self {
            sender,
            chat_id: chat_id.into(),
        }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Deliver `text` to the configured chat.
    ///
    /// Returns `true` when the message was accepted. A failure is logged and
    /// swallowed; there is no retry within a single call.
    pub async fn notify(&self, text: &str) -> bool {
        tracing::info!(chat_id = %self.chat_id, "Sending message to chat");

        match self.sender.send(&self.chat_id, text).await {
            Ok(()) => {
                tracing::info!(chat_id = %self.chat_id, message = text, "Message delivered");
                true
            }
            Err(e) => {
                tracing::error!(
                    chat_id = %self.chat_id,
                    message = text,
                    error = %e,
                    "Failed to deliver message"
                );
                false
            }
        }
    }
}
