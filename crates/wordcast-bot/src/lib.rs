//! Wordcast bot service.
//!
//! Glues the word pool and subscriber registry to three external HTTP APIs:
//! the Telegram Bot API (inbound commands, outbound messages), a random-word
//! provider (pool refill), and a learner's dictionary (definitions). A daily
//! cron trigger refills the pool and fans the word of the day out to every
//! subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Client methods surface transport failures; per-call # Errors sections add nothing
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod delivery;
pub mod error;
pub mod fanout;
pub mod providers;
pub mod router;
pub mod scheduler;
pub mod state;
pub mod supply;
pub mod telegram;

pub use config::BotConfig;
pub use error::BotError;
pub use state::AppState;
