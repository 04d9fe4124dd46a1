//! Service configuration.

/// Bot configuration loaded from environment variables.
///
/// API credentials deliberately fall back to empty strings rather than
/// failing startup; the bot logs which integrations look unconfigured and
/// their requests fail at call time.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token from `BotFather`.
    pub bot_token: String,

    /// RapidAPI key for the random-word provider.
    pub rapid_api_key: String,

    /// Merriam-Webster learner's dictionary API key.
    pub dictionary_api_key: String,

    /// Path to the `RocksDB` data directory (default: "/data/wordcast").
    pub data_dir: String,

    /// Telegram API base URL (overridable for tests).
    pub telegram_api_url: String,

    /// Random-word provider base URL (overridable for tests).
    pub words_api_url: String,

    /// Dictionary provider base URL (overridable for tests).
    pub dictionary_api_url: String,

    /// Cron expression for the daily run (default: "0 8 * * *").
    pub daily_cron: String,
}

impl BotConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            rapid_api_key: std::env::var("RAPID_API_KEY").unwrap_or_default(),
            dictionary_api_key: std::env::var("DICTIONARY_API_KEY").unwrap_or_default(),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/data/wordcast".into()),
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".into()),
            words_api_url: std::env::var("WORDS_API_URL")
                .unwrap_or_else(|_| "https://random-words5.p.rapidapi.com".into()),
            dictionary_api_url: std::env::var("DICTIONARY_API_URL")
                .unwrap_or_else(|_| "https://www.dictionaryapi.com".into()),
            daily_cron: std::env::var("DAILY_CRON").unwrap_or_else(|_| "0 8 * * *".into()),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            rapid_api_key: String::new(),
            dictionary_api_key: String::new(),
            data_dir: "/data/wordcast".into(),
            telegram_api_url: "https://api.telegram.org".into(),
            words_api_url: "https://random-words5.p.rapidapi.com".into(),
            dictionary_api_url: "https://www.dictionaryapi.com".into(),
            daily_cron: "0 8 * * *".into(),
        }
    }
}
