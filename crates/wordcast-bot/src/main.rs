//! Wordcast bot - daily word delivery over Telegram.
//!
//! This is the main entry point for the bot process.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordcast_bot::providers::{DictionaryClient, RandomWordsClient};
use wordcast_bot::telegram::TelegramClient;
use wordcast_bot::{router, scheduler, AppState, BotConfig};
use wordcast_store::RocksStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wordcast=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting wordcast bot");

    let config = BotConfig::from_env();

    tracing::info!(
        data_dir = %config.data_dir,
        daily_cron = %config.daily_cron,
        telegram_configured = !config.bot_token.is_empty(),
        "Configuration loaded"
    );

    // A database that cannot be opened is fatal; nothing works without it.
    tracing::info!(path = %config.data_dir, "Opening RocksDB store");
    let store = Arc::new(RocksStore::open(&config.data_dir)?);

    let telegram = TelegramClient::new(&config.telegram_api_url, &config.bot_token);
    let words = RandomWordsClient::new(&config.words_api_url, &config.rapid_api_key);
    let dictionary = DictionaryClient::new(&config.dictionary_api_url, &config.dictionary_api_key);

    let state = Arc::new(AppState::new(
        store,
        Arc::new(telegram.clone()),
        Arc::new(words),
        Arc::new(dictionary),
        config,
    ));

    // Daily supply + fanout loop.
    let schedule_state = Arc::clone(&state);
    tokio::spawn(async move {
        if let Err(error) = scheduler::run_daily(schedule_state).await {
            tracing::error!(%error, "scheduler stopped");
        }
    });

    // Inbound event loop: long-poll Telegram and route each update.
    tracing::info!("Polling for updates");
    let mut offset = 0i64;
    loop {
        match telegram.get_updates(offset).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    router::handle_update(Arc::clone(&state), update).await;
                }
            }
            Err(error) => {
                tracing::warn!(%error, "getUpdates failed, backing off");
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            }
        }
    }
}
