//! Application state.

use std::sync::Arc;

use wordcast_store::Store;

use crate::config::BotConfig;
use crate::providers::{Dictionary, WordSource};
use crate::telegram::Messenger;

/// Shared dependencies, constructed once at startup and passed to every
/// service. The store handle in particular is the single shared connection
/// for the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn Store>,

    /// Outbound chat messaging.
    pub messenger: Arc<dyn Messenger>,

    /// Random-word batch source.
    pub words: Arc<dyn WordSource>,

    /// Definition lookup.
    pub dictionary: Arc<dyn Dictionary>,

    /// Bot configuration.
    pub config: BotConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        store: Arc<dyn Store>,
        messenger: Arc<dyn Messenger>,
        words: Arc<dyn WordSource>,
        dictionary: Arc<dyn Dictionary>,
        config: BotConfig,
    ) -> Self {
        if config.rapid_api_key.is_empty() {
            tracing::warn!("RAPID_API_KEY is empty - word supply requests will fail");
        }
        if config.dictionary_api_key.is_empty() {
            tracing::warn!("DICTIONARY_API_KEY is empty - definition lookups will fail");
        }

        Self {
            store,
            messenger,
            words,
            dictionary,
            config,
        }
    }
}
