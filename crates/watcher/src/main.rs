use std::path::PathBuf;

use chrono::Utc;

use homework_common::config::AppConfig;
use homework_notifier::{Notifier, TelegramSender};
use homework_watcher::client::PracticumClient;
use homework_watcher::logging;
use homework_watcher::watcher::HomeworkWatcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing (stdout, plus LOG_FILE when set)
    let log_file = std::env::var_os("LOG_FILE").map(PathBuf::from);
    logging::init(log_file.as_deref())?;

    tracing::info!("Homework watcher starting...");

    // Load configuration; a missing secret stops us before any network call
    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Cannot start without required configuration");
    })?;

    let source = PracticumClient::new(&config.practicum_endpoint, &config.practicum_token);
    let sender = TelegramSender::new(&config.telegram_api_url, &config.telegram_token);
    let notifier = Notifier::new(sender, &config.telegram_chat_id);

    let mut watcher = HomeworkWatcher::new(
        source,
        notifier,
        config.retry_interval(),
        Utc::now().timestamp(),
    );

    tokio::select! {
        _ = watcher.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework watcher stopped.");
    Ok(())
}
