//! Identifier types for wordcast.
//!
//! This module provides strongly-typed identifiers for words and chat sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// A word identifier using ULID for time-ordering.
///
/// Word ids are time-ordered, so iterating records in key order yields them
/// in insertion order. This is what makes first-in-first-out allocation a
/// plain prefix scan.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WordId(Ulid);

impl WordId {
    /// Create a new `WordId` from a ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Generate a new `WordId` with the current timestamp.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Return the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> &Ulid {
        &self.0
    }

    /// Return the bytes of the ULID (16 bytes).
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_bytes()
    }

    /// Create a `WordId` from bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Ulid::from_bytes(bytes))
    }
}

impl FromStr for WordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ulid = Ulid::from_string(s).map_err(|_| IdError::InvalidUlid)?;
        Ok(Self(ulid))
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WordId> for String {
    fn from(id: WordId) -> Self {
        id.0.to_string()
    }
}

/// A chat session identifier, as assigned by the chat platform.
///
/// This is the subscription key: at most one subscriber record exists per
/// chat id at any time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Create a new `ChatId` from the platform's raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Return the big-endian bytes of the identifier (8 bytes).
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChatId({})", self.0)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a valid ULID.
    #[error("invalid ULID format")]
    InvalidUlid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_id_roundtrip() {
        let id = WordId::generate();
        let str_repr = id.to_string();
        let parsed = WordId::from_str(&str_repr).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn word_id_serde_json() {
        let id = WordId::generate();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: WordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn word_id_bytes_roundtrip() {
        let id = WordId::generate();
        let bytes = id.to_bytes();
        assert_eq!(WordId::from_bytes(bytes), id);
    }

    #[test]
    fn word_id_rejects_garbage() {
        assert_eq!(WordId::from_str("not-a-ulid"), Err(IdError::InvalidUlid));
    }

    #[test]
    fn chat_id_serde_is_transparent() {
        let id = ChatId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let parsed: ChatId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn chat_id_bytes_are_big_endian() {
        let id = ChatId::new(1);
        assert_eq!(id.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
