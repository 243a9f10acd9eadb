//! Gradewatch Bot
//!
//! A long-running watcher for a single homework submission under review.
//!
//! Architecture:
//! - Configuration: secrets and intervals loaded from the environment
//! - Services: trait seams over the typed HTTP clients (fetch, notify)
//! - Scheduler: the poll/dedup/notify loop
//!
//! The bot polls the review API on a fixed interval and pushes exactly one
//! Telegram message per status change, or per distinct failure.

mod config;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::BestEffortNotifier;
use gradewatch_client::{StatusClient, TelegramClient};

/// Persistent log sink written alongside stdout
const LOG_FILE: &str = "gradewatch.log";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing()?;

    info!("Starting gradewatch bot");

    // Missing secrets are the one normal exit path: log at the highest
    // severity and leave with status 0 without entering the loop.
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start, configuration incomplete: {e:#}");
            return Ok(());
        }
    };

    info!(
        "Loaded configuration: endpoint={}, poll_interval={:?}",
        config.endpoint, config.poll_interval
    );

    let source = StatusClient::new(config.endpoint.clone(), config.api_token.clone());
    let notifier = BestEffortNotifier::new(TelegramClient::new(
        config.messaging_token.clone(),
        config.messaging_chat_id.clone(),
    ));

    info!("Clients initialized");

    let mut poller = StatusPoller::new(config, source, notifier);

    info!("Starting poll loop");
    poller.run().await
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Initializes tracing with an env filter, a stdout layer and a file layer
fn init_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {LOG_FILE}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradewatch_bot=debug,gradewatch_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    Ok(())
}
