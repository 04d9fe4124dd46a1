//! Telegram Bot API integration.

pub mod client;
pub mod types;

pub use client::{TelegramClient, TelegramError};
pub use types::{Chat, Message, ReplyKeyboardMarkup, Update};

use async_trait::async_trait;
use wordcast_core::ChatId;

/// Outbound messaging seam.
///
/// The router and fanout services send through this trait so they can be
/// exercised against a recording fake; `TelegramClient` is the production
/// implementation.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a plain text message to a chat session.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TelegramError>;

    /// Send a message with a one-time reply keyboard offering fixed options.
    async fn send_prompt(
        &self,
        chat_id: ChatId,
        text: &str,
        options: &[&str],
    ) -> Result<(), TelegramError>;
}
