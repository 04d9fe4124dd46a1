//! Common test fixtures: fakes for the messenger and providers, plus a
//! harness wiring them to a real store in a temp directory.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use wordcast_bot::providers::{Dictionary, ProviderError, WordSource};
use wordcast_bot::telegram::{Messenger, TelegramError};
use wordcast_bot::{AppState, BotConfig};
use wordcast_core::{ChatId, DefinitionEntry};
use wordcast_store::RocksStore;

/// Messenger fake that records every send and can be told to fail for
/// specific chats.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<(ChatId, String)>>,
    pub prompts: Mutex<Vec<(ChatId, String, Vec<String>)>>,
    pub fail_for: Mutex<HashSet<i64>>,
}

impl RecordingMessenger {
    pub fn fail_for(&self, chat_id: ChatId) {
        self.fail_for.lock().unwrap().insert(chat_id.as_i64());
    }

    pub fn sent_to(&self, chat_id: ChatId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == chat_id)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn check(&self, chat_id: ChatId) -> Result<(), TelegramError> {
        if self.fail_for.lock().unwrap().contains(&chat_id.as_i64()) {
            return Err(TelegramError::Api {
                description: "chat unreachable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TelegramError> {
        self.check(chat_id)?;
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }

    async fn send_prompt(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[&str],
    ) -> Result<(), TelegramError> {
        self.check(chat_id)?;
        self.prompts.lock().unwrap().push((
            chat_id,
            text.to_string(),
            options.iter().map(ToString::to_string).collect(),
        ));
        Ok(())
    }
}

/// Word source fake returning a fixed batch.
#[derive(Default)]
pub struct StaticWordSource {
    pub words: Vec<String>,
}

impl StaticWordSource {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(ToString::to_string).collect(),
        }
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn random_words(&self, count: usize) -> Result<Vec<String>, ProviderError> {
        Ok(self.words.iter().take(count).cloned().collect())
    }
}

/// Word source fake that always fails, counting attempts.
#[derive(Default)]
pub struct FailingWordSource {
    pub attempts: AtomicU32,
}

#[async_trait]
impl WordSource for FailingWordSource {
    async fn random_words(&self, _count: usize) -> Result<Vec<String>, ProviderError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Api { status: 500 })
    }
}

/// Dictionary fake backed by a fixed word -> entries map.
#[derive(Default)]
pub struct StaticDictionary {
    pub entries: HashMap<String, Vec<DefinitionEntry>>,
}

impl StaticDictionary {
    pub fn with_noun(words: &[(&str, &str)]) -> Self {
        let entries = words
            .iter()
            .map(|(word, meaning)| {
                (
                    (*word).to_string(),
                    vec![DefinitionEntry::new("noun", vec![(*meaning).to_string()])],
                )
            })
            .collect();
        Self { entries }
    }
}

#[async_trait]
impl Dictionary for StaticDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<Vec<DefinitionEntry>>, ProviderError> {
        Ok(self.entries.get(word).cloned())
    }
}

/// Test harness: real RocksDB store in a temp directory, fakes everywhere
/// else.
pub struct TestHarness {
    pub state: Arc<AppState>,
    pub store: Arc<RocksStore>,
    pub messenger: Arc<RecordingMessenger>,
    pub _temp_dir: TempDir,
}

impl TestHarness {
    pub fn new(words: StaticWordSource, dictionary: StaticDictionary) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Arc::new(RocksStore::open(temp_dir.path()).expect("Failed to open store"));
        let messenger = Arc::new(RecordingMessenger::default());

        let state = Arc::new(AppState::new(
            store.clone(),
            messenger.clone(),
            Arc::new(words),
            Arc::new(dictionary),
            BotConfig::default(),
        ));

        Self {
            state,
            store,
            messenger,
            _temp_dir: temp_dir,
        }
    }
}
