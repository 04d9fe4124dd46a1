//! Random-word provider client (RapidAPI).

use reqwest::Client;
use std::time::Duration;

use async_trait::async_trait;

use super::ProviderError;

/// Word batch source seam.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch `count` random words.
    async fn random_words(&self, count: usize) -> Result<Vec<String>, ProviderError>;
}

/// Client for the `random-words5` RapidAPI endpoint.
///
/// `GET {base}/getMultipleRandom?count=N` returns a JSON array of strings.
#[derive(Debug, Clone)]
pub struct RandomWordsClient {
    client: Client,
    base_url: String,
    api_key: String,
    host: String,
}

impl RandomWordsClient {
    /// Create a new random-words client.
    ///
    /// The `X-RapidAPI-Host` header is derived from the base URL's host.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let host = reqwest::Url::parse(&base_url)
            .ok()
            .and_then(|url| url.host_str().map(ToString::to_string))
            .unwrap_or_default();

        Self {
            client,
            base_url,
            api_key: api_key.into(),
            host,
        }
    }
}

#[async_trait]
impl WordSource for RandomWordsClient {
    async fn random_words(&self, count: usize) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/getMultipleRandom", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("count", count)])
            .header("X-RapidAPI-Host", &self.host)
            .header("X-RapidAPI-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let words: Vec<String> = response.json().await?;
        Ok(words)
    }
}
