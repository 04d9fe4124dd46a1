//! `RocksDB` storage layer for wordcast.
//!
//! This crate provides persistent storage for the word pool and the
//! subscriber registry using `RocksDB` with column families.
//!
//! # Architecture
//!
//! The storage uses the following column families:
//!
//! - `words`: Primary word records, keyed by `WordId` (ULID, time-ordered)
//! - `words_unused`: Index of unclaimed word ids (empty values); claiming a
//!   word removes its index entry in the same atomic batch that flips the
//!   `is_used` flag
//! - `subscribers`: Subscriber records, keyed by `ChatId`
//!
//! # Example
//!
//! ```no_run
//! use wordcast_store::{RocksStore, Store};
//! use wordcast_core::ChatId;
//!
//! let store = RocksStore::open("/tmp/wordcast-db").unwrap();
//!
//! store.append_words(&["serendipity".into()]).unwrap();
//! let claimed = store.claim_next_word().unwrap();
//! assert_eq!(claimed.unwrap().word, "serendipity");
//!
//! assert!(store.subscribe(ChatId::new(42)).unwrap());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use wordcast_core::{ChatId, Subscriber, WordId, WordRecord};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer so the bot's services can be
/// exercised against a real store in tests without a running process.
pub trait Store: Send + Sync {
    // =========================================================================
    // Word Pool Operations
    // =========================================================================

    /// Append a batch of words to the pool, all unused.
    ///
    /// No dedup is performed against existing records; the same headword may
    /// enter the pool twice. Returns the generated ids in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn append_words(&self, words: &[String]) -> Result<Vec<WordId>>;

    /// Atomically claim the oldest unused word, marking it used.
    ///
    /// A record is returned by this operation at most once, ever, even under
    /// concurrent callers. Returns `None` when the pool has no unused records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn claim_next_word(&self) -> Result<Option<WordRecord>>;

    /// Count the unused records remaining in the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn unused_word_count(&self) -> Result<u64>;

    // =========================================================================
    // Subscriber Operations
    // =========================================================================

    /// Subscribe a chat session. Atomic insert-if-absent.
    ///
    /// Returns `true` if a record was created, `false` if the chat was
    /// already subscribed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn subscribe(&self, chat_id: ChatId) -> Result<bool>;

    /// Unsubscribe a chat session.
    ///
    /// Returns `true` if a record was deleted, `false` if the chat was not
    /// subscribed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn unsubscribe(&self, chat_id: ChatId) -> Result<bool>;

    /// Check whether a chat session is currently subscribed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn is_subscribed(&self, chat_id: ChatId) -> Result<bool>;

    /// List all current subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_subscribers(&self) -> Result<Vec<Subscriber>>;
}
