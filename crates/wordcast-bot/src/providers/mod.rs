//! Word-list and dictionary provider clients.

pub mod dictionary;
pub mod words;

pub use dictionary::{Dictionary, DictionaryClient};
pub use words::{RandomWordsClient, WordSource};

/// Error type for provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status.
    #[error("provider returned HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
    },
}
