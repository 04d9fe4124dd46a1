//! Word pool record type.

use serde::{Deserialize, Serialize};

use crate::WordId;

/// A single word in the shared pool.
///
/// Records are created in batches by the supply service, mutated exactly once
/// (unused to used) on allocation, and never deleted. The pool intentionally
/// carries no dedup: the same headword may appear more than once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    /// Time-ordered record id; doubles as the insertion-order key.
    pub id: WordId,

    /// The dictionary headword.
    pub word: String,

    /// Whether this record has been allocated. Set true exactly once.
    #[serde(default)]
    pub is_used: bool,
}

impl WordRecord {
    /// Create a new unused record with a freshly generated id.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            id: WordId::generate(),
            word: word.into(),
            is_used: false,
        }
    }

    /// Create a new unused record with a caller-supplied id.
    ///
    /// Used by the store, which generates monotonic ids so that records
    /// appended in one batch keep their relative order.
    #[must_use]
    pub fn with_id(id: WordId, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            is_used: false,
        }
    }
}
