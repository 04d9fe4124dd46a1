//! Key encoding utilities for `RocksDB`.

use wordcast_core::{ChatId, WordId};

/// Create a word key from a word ID.
///
/// ULID bytes sort in generation order, so iterating the `words_unused`
/// column family from the start yields the oldest unclaimed word first.
#[must_use]
pub fn word_key(word_id: &WordId) -> Vec<u8> {
    word_id.to_bytes().to_vec()
}

/// Extract the word ID from a word key.
///
/// # Panics
///
/// Panics if the key is not exactly 16 bytes.
#[must_use]
pub fn word_id_from_key(key: &[u8]) -> WordId {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&key[..16]);
    WordId::from_bytes(bytes)
}

/// Create a subscriber key from a chat ID.
#[must_use]
pub fn subscriber_key(chat_id: ChatId) -> Vec<u8> {
    chat_id.to_bytes().to_vec()
}
