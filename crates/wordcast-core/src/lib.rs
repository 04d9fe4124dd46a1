//! Core types and pure logic for wordcast.
//!
//! This crate provides the foundational types used throughout the wordcast bot:
//!
//! - **Identifiers**: `WordId`, `ChatId`
//! - **Records**: `WordRecord`, `Subscriber`
//! - **Definitions**: `DefinitionEntry`
//! - **Formatting**: `render_daily_word`
//!
//! # Word pool
//!
//! Words live in a shared pool. Each `WordRecord` is created unused, claimed
//! exactly once (its `is_used` flag flips to true), and never deleted or
//! reused. `WordId` is a ULID, so insertion order is encoded in the id itself
//! and the oldest unused word is always the smallest unclaimed id.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definition;
pub mod format;
pub mod ids;
pub mod subscriber;
pub mod word;

pub use definition::DefinitionEntry;
pub use format::render_daily_word;
pub use ids::{ChatId, IdError, WordId};
pub use subscriber::Subscriber;
pub use word::WordRecord;
