//! Error types for wordcast storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The unused-word index pointed at a record that does not exist.
    #[error("corrupt index: no word record for id {word_id}")]
    CorruptIndex {
        /// The dangling word id.
        word_id: String,
    },
}
