//! The poll / compare / notify loop.
//!
//! Each iteration fetches statuses since the cursor, advances the cursor to
//! the server's `current_date`, validates the payload and formats the newest
//! record. A sentence is only sent when it differs from the last one that was
//! delivered. Any failure is reported to the chat and the loop carries on
//! after the usual wait.

use std::time::Duration;

use homework_common::error::WatchError;
use homework_notifier::{ChatSender, Notifier};

use crate::client::HomeworkSource;
use crate::response::{current_date, validate};
use crate::status::format_status;

/// Longest failure notice sent to the chat, in characters. Telegram rejects
/// messages over 4096, and an error can embed a whole HTML error page.
pub const MAX_NOTICE_CHARS: usize = 1024;

/// What a single iteration ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new status sentence was delivered.
    Notified,
    /// The newest status equals the last delivered one.
    Unchanged,
    /// The API returned an empty `homeworks` list.
    NoNewStatuses,
    /// A new status was found but could not be delivered; it is retried next time.
    DeliveryFailed,
    /// The iteration failed; a failure notice was sent (best effort).
    Failed,
}

/// Owns the polling cursor and the last delivered message.
pub struct HomeworkWatcher<H, S> {
    source: H,
    notifier: Notifier<S>,
    interval: Duration,
    cursor: i64,
    last_message: Option<String>,
}

impl<H: HomeworkSource, S: ChatSender> HomeworkWatcher<H, S> {
    pub fn new(source: H, notifier: Notifier<S>, interval: Duration, cursor: i64) -> Self {
        Self {
            source,
            notifier,
            interval,
            cursor,
            last_message: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn notifier(&self) -> &Notifier<S> {
        &self.notifier
    }

    pub fn source(&self) -> &H {
        &self.source
    }

    /// Poll forever, waiting `interval` after every iteration.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            interval_secs = self.interval.as_secs(),
            "Homework watcher started"
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Run one iteration, reporting any failure instead of returning it.
    pub async fn tick(&mut self) -> PollOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = failure_notice(&e);
                tracing::error!(error = %e, "Polling iteration failed");
                self.notifier.notify(&message).await;
                PollOutcome::Failed
            }
        }
    }

    /// Run one iteration and return the first error it hits.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, WatchError> {
        let payload = self.source.fetch(self.cursor).await?;

        if let Some(next) = current_date(&payload) {
            tracing::debug!(from = self.cursor, to = next, "Advancing poll cursor");
            self.cursor = next;
        }

        let homeworks = validate(&payload)?;
        tracing::info!(count = homeworks.len(), "Homework list received");

        let Some(newest) = homeworks.first() else {
            tracing::info!("No new statuses");
            return Ok(PollOutcome::NoNewStatuses);
        };

        let message = format_status(newest)?;

        if self.last_message.as_deref() == Some(message.as_str()) {
            tracing::info!("No change in homework status");
            return Ok(PollOutcome::Unchanged);
        }

        tracing::info!("Homework status changed");
        if self.notifier.notify(&message).await {
            self.last_message = Some(message);
            Ok(PollOutcome::Notified)
        } else {
            Ok(PollOutcome::DeliveryFailed)
        }
    }
}

/// Chat text for a failed iteration, cut to [`MAX_NOTICE_CHARS`].
pub fn failure_notice(error: &WatchError) -> String {
    let message = format!("Сбой в работе программы: {error}");
    if message.chars().count() <= MAX_NOTICE_CHARS {
        return message;
    }
    let mut truncated: String = message.chars().take(MAX_NOTICE_CHARS - 1).collect();
    truncated.push('…');
    truncated
}
