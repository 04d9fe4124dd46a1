//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};

use wordcast_core::{ChatId, Subscriber, WordId, WordRecord};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    /// Monotonic ULID source: ids generated within the same millisecond
    /// still sort in generation order, keeping batch appends FIFO.
    id_gen: Mutex<ulid::Generator>,
    /// Serializes claim operations so two concurrent callers cannot read
    /// the same head of the unused index before either writes.
    claim_lock: Mutex<()>,
    /// Serializes the subscribe existence-check-and-insert.
    subscriber_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            id_gen: Mutex::new(ulid::Generator::new()),
            claim_lock: Mutex::new(()),
            subscriber_lock: Mutex::new(()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
        mutex
            .lock()
            .map_err(|_| StoreError::Database("lock poisoned".into()))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn get_word(&self, word_id: &WordId) -> Result<Option<WordRecord>> {
        let cf = self.cf(cf::WORDS)?;
        self.db
            .get_cf(&cf, keys::word_key(word_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn get_subscriber(&self, chat_id: ChatId) -> Result<Option<Subscriber>> {
        let cf = self.cf(cf::SUBSCRIBERS)?;
        self.db
            .get_cf(&cf, keys::subscriber_key(chat_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }
}

impl Store for RocksStore {
    // =========================================================================
    // Word Pool Operations
    // =========================================================================

    fn append_words(&self, words: &[String]) -> Result<Vec<WordId>> {
        let cf_words = self.cf(cf::WORDS)?;
        let cf_unused = self.cf(cf::WORDS_UNUSED)?;

        let mut ids = Vec::with_capacity(words.len());
        let mut batch = WriteBatch::default();

        {
            let mut id_gen = Self::lock(&self.id_gen)?;
            for word in words {
                let ulid = id_gen
                    .generate()
                    .map_err(|e| StoreError::Database(format!("id generation failed: {e}")))?;
                let record = WordRecord::with_id(WordId::from_ulid(ulid), word.clone());
                let key = keys::word_key(&record.id);

                batch.put_cf(&cf_words, &key, Self::serialize(&record)?);
                batch.put_cf(&cf_unused, &key, []); // Index entry (empty value)
                ids.push(record.id);
            }
        }

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(ids)
    }

    fn claim_next_word(&self) -> Result<Option<WordRecord>> {
        let _guard = Self::lock(&self.claim_lock)?;

        let cf_unused = self.cf(cf::WORDS_UNUSED)?;

        // Smallest key in the unused index is the oldest-inserted word.
        let Some(head) = self.db.iterator_cf(&cf_unused, IteratorMode::Start).next() else {
            return Ok(None);
        };
        let (key, _) = head.map_err(|e| StoreError::Database(e.to_string()))?;

        let word_id = keys::word_id_from_key(&key);
        let mut record = self
            .get_word(&word_id)?
            .ok_or_else(|| StoreError::CorruptIndex {
                word_id: word_id.to_string(),
            })?;

        record.is_used = true;

        let cf_words = self.cf(cf::WORDS)?;
        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_words, &key, Self::serialize(&record)?);
        batch.delete_cf(&cf_unused, &key);

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Some(record))
    }

    fn unused_word_count(&self) -> Result<u64> {
        let cf_unused = self.cf(cf::WORDS_UNUSED)?;

        let mut count = 0u64;
        for item in self.db.iterator_cf(&cf_unused, IteratorMode::Start) {
            item.map_err(|e| StoreError::Database(e.to_string()))?;
            count += 1;
        }
        Ok(count)
    }

    // =========================================================================
    // Subscriber Operations
    // =========================================================================

    fn subscribe(&self, chat_id: ChatId) -> Result<bool> {
        let _guard = Self::lock(&self.subscriber_lock)?;

        if self.get_subscriber(chat_id)?.is_some() {
            return Ok(false);
        }

        let cf = self.cf(cf::SUBSCRIBERS)?;
        let subscriber = Subscriber::new(chat_id);
        self.db
            .put_cf(
                &cf,
                keys::subscriber_key(chat_id),
                Self::serialize(&subscriber)?,
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(true)
    }

    fn unsubscribe(&self, chat_id: ChatId) -> Result<bool> {
        let _guard = Self::lock(&self.subscriber_lock)?;

        if self.get_subscriber(chat_id)?.is_none() {
            return Ok(false);
        }

        let cf = self.cf(cf::SUBSCRIBERS)?;
        self.db
            .delete_cf(&cf, keys::subscriber_key(chat_id))
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(true)
    }

    fn is_subscribed(&self, chat_id: ChatId) -> Result<bool> {
        Ok(self.get_subscriber(chat_id)?.is_some())
    }

    fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        let cf = self.cf(cf::SUBSCRIBERS)?;

        let mut subscribers = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            subscribers.push(Self::deserialize(&value)?);
        }
        Ok(subscribers)
    }
}
