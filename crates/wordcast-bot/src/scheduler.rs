//! Daily scheduler: cron-triggered supply + fanout.

use std::sync::Arc;

use chrono::Utc;
use croner::Cron;

use crate::error::BotError;
use crate::fanout;
use crate::state::AppState;
use crate::supply;

/// Run the daily schedule forever.
///
/// Sleeps until the next occurrence of the configured cron expression
/// (default `0 8 * * *`), then replenishes the pool and fans the daily word
/// out to every subscriber. A failing run is logged and never stops the
/// loop.
///
/// # Errors
///
/// Returns an error only if the cron expression is invalid.
pub async fn run_daily(state: Arc<AppState>) -> Result<(), BotError> {
    let cron = Cron::new(&state.config.daily_cron)
        .parse()
        .map_err(|e| BotError::Schedule(e.to_string()))?;

    loop {
        let now = Utc::now();
        let next = cron
            .find_next_occurrence(&now, false)
            .map_err(|e| BotError::Schedule(e.to_string()))?;
        let wait = (next - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);

        tracing::info!(next = %next, "daily run scheduled");
        tokio::time::sleep(wait).await;

        if let Err(error) = supply::replenish(state.words.as_ref(), state.store.as_ref()).await {
            tracing::error!(%error, "daily word supply failed");
        }
        if let Err(error) = fanout::send_daily_words(&state).await {
            tracing::error!(%error, "daily fanout failed");
        }
    }
}
