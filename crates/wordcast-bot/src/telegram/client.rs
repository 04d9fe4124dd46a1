//! Telegram Bot API client implementation.

use reqwest::Client;
use std::time::Duration;

use async_trait::async_trait;
use wordcast_core::ChatId;

use super::types::{
    ApiResponse, GetUpdatesRequest, ReplyKeyboardMarkup, SendMessageRequest, Update,
};
use super::Messenger;

/// Long-poll timeout passed to `getUpdates`, in seconds.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Error type for Telegram operations.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram API returned an error.
    #[error("Telegram API error: {description}")]
    Api {
        /// Error description from the API.
        description: String,
    },
}

/// Telegram Bot API client.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a new Telegram client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API base URL (e.g. `"https://api.telegram.org"`)
    /// * `token` - Bot token from `BotFather`
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        // Request timeout must outlive the long-poll window.
        let client = Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Fetch inbound updates via long polling.
    ///
    /// Blocks for up to the poll timeout when no updates are pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports an error.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TelegramError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: POLL_TIMEOUT_SECS,
        };

        let response = self
            .client
            .post(self.method_url("getUpdates"))
            .json(&request)
            .send()
            .await?;

        Ok(Self::handle_response::<Vec<Update>>(response)
            .await?
            .unwrap_or_default())
    }

    async fn send(
        &self,
        chat_id: ChatId,
        text: &str,
        reply_markup: Option<ReplyKeyboardMarkup>,
    ) -> Result<(), TelegramError> {
        let request = SendMessageRequest {
            chat_id: chat_id.as_i64(),
            text,
            reply_markup,
        };

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&request)
            .send()
            .await?;

        Self::handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, TelegramError> {
        let status = response.status();
        let body: ApiResponse<T> = match response.json().await {
            Ok(body) => body,
            Err(_) => {
                return Err(TelegramError::Api {
                    description: format!("HTTP {status}"),
                })
            }
        };

        if body.ok {
            Ok(body.result)
        } else {
            Err(TelegramError::Api {
                description: body
                    .description
                    .unwrap_or_else(|| format!("HTTP {status}")),
            })
        }
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TelegramError> {
        self.send(chat_id, text, None).await
    }

    async fn send_prompt(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[&str],
    ) -> Result<(), TelegramError> {
        self.send(chat_id, text, Some(ReplyKeyboardMarkup::one_time_row(options)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert_eq!(client.base_url, "https://api.telegram.org");
    }

    #[test]
    fn method_url_embeds_token() {
        let client = TelegramClient::new("https://api.telegram.org", "123:abc");
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }
}
