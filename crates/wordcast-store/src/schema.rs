//! Database schema definitions and column families.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary word records, keyed by `WordId` (ULID).
    pub const WORDS: &str = "words";

    /// Index: unclaimed word ids, keyed by `WordId`. Value is empty
    /// (index only); the entry disappears when the word is claimed.
    pub const WORDS_UNUSED: &str = "words_unused";

    /// Subscriber records, keyed by `ChatId` (big-endian i64).
    pub const SUBSCRIBERS: &str = "subscribers";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::WORDS, cf::WORDS_UNUSED, cf::SUBSCRIBERS]
}
