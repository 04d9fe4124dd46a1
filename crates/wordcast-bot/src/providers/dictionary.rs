//! Dictionary provider client (Merriam-Webster learner's dictionary).

use reqwest::Client;
use std::time::Duration;

use async_trait::async_trait;
use wordcast_core::DefinitionEntry;

use super::ProviderError;

/// Definition lookup seam.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a headword.
    ///
    /// `Ok(None)` means the provider answered but had no usable entries;
    /// `Err` means the request itself failed. Callers treat both as "no
    /// definition found".
    async fn lookup(&self, word: &str) -> Result<Option<Vec<DefinitionEntry>>, ProviderError>;
}

/// Client for the Merriam-Webster learner's dictionary API.
///
/// `GET {base}/api/v3/references/learners/json/{word}?key=K` returns a JSON
/// array. Each proper entry carries `fl` (part of speech), `shortdef` (short
/// definitions) and optionally `dros[].drp` (usage phrases). When the word is
/// unknown the array holds bare spelling-suggestion strings instead, which
/// the mapping filters out.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DictionaryClient {
    /// Create a new dictionary client.
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

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Map one raw entry to a normalized `DefinitionEntry`.
    ///
    /// Returns `None` for entries without a part-of-speech tag or short
    /// definitions (spelling suggestions, cross-references).
    fn map_entry(entry: &serde_json::Value) -> Option<DefinitionEntry> {
        let figure_of_speech = entry.get("fl")?.as_str()?.to_string();
        let meanings: Vec<String> = entry
            .get("shortdef")?
            .as_array()?
            .iter()
            .filter_map(|def| def.as_str().map(ToString::to_string))
            .collect();
        if meanings.is_empty() {
            return None;
        }

        let examples = entry
            .get("dros")
            .and_then(serde_json::Value::as_array)
            .map(|dros| {
                dros.iter()
                    .filter_map(|dro| dro.get("drp"))
                    .filter_map(|drp| drp.as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Some(DefinitionEntry {
            figure_of_speech,
            meanings,
            examples,
        })
    }
}

#[async_trait]
impl Dictionary for DictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Option<Vec<DefinitionEntry>>, ProviderError> {
        let url = format!("{}/api/v3/references/learners/json/{word}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let Some(raw_entries) = body.as_array() else {
            return Ok(None);
        };

        let entries: Vec<DefinitionEntry> =
            raw_entries.iter().filter_map(Self::map_entry).collect();

        if entries.is_empty() {
            Ok(None)
        } else {
            Ok(Some(entries))
        }
    }
}
