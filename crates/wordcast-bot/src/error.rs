//! Bot error types.

use crate::providers::ProviderError;
use crate::telegram::TelegramError;
use wordcast_store::StoreError;

/// Errors that can occur while handling events or scheduled runs.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Storage operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Word-list or dictionary provider failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Telegram API call failed.
    #[error("telegram error: {0}")]
    Telegram(#[from] TelegramError),

    /// Word supply gave up after its bounded retries.
    #[error("word supply failed after {attempts} attempts: {last}")]
    SupplyFailed {
        /// How many attempts were made.
        attempts: u32,
        /// The error from the final attempt.
        #[source]
        last: Box<BotError>,
    },

    /// The daily cron expression could not be parsed or evaluated.
    #[error("schedule error: {0}")]
    Schedule(String),
}
