//! Telegram Bot API wire types.
//!
//! Only the fields this bot reads are modeled; Telegram sends many more.

use serde::{Deserialize, Serialize};

/// Envelope every Bot API method returns.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,
    /// The method result, present when `ok` is true.
    pub result: Option<T>,
    /// Human-readable error, present when `ok` is false.
    #[serde(default)]
    pub description: Option<String>,
}

/// An inbound update from `getUpdates` long polling.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier; the next poll offset is the max seen + 1.
    pub update_id: i64,
    /// The message payload, when the update carries one.
    pub message: Option<Message>,
}

/// An inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// The chat session the message arrived on.
    pub chat: Chat,
    /// Text content; absent for stickers, photos, etc.
    pub text: Option<String>,
}

/// A chat session.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Platform chat identifier (negative for group chats).
    pub id: i64,
}

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    /// Destination chat.
    pub chat_id: i64,
    /// Message text.
    pub text: &'a str,
    /// Optional quick-reply keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyKeyboardMarkup>,
}

/// A one-time reply keyboard.
#[derive(Debug, Serialize)]
pub struct ReplyKeyboardMarkup {
    /// Button rows.
    pub keyboard: Vec<Vec<KeyboardButton>>,
    /// Hide the keyboard after one use.
    pub one_time_keyboard: bool,
}

impl ReplyKeyboardMarkup {
    /// Build a single-row one-time keyboard from option labels.
    #[must_use]
    pub fn one_time_row(options: &[&str]) -> Self {
        Self {
            keyboard: vec![options
                .iter()
                .map(|text| KeyboardButton {
                    text: (*text).to_string(),
                })
                .collect()],
            one_time_keyboard: true,
        }
    }
}

/// A reply keyboard button.
#[derive(Debug, Serialize)]
pub struct KeyboardButton {
    /// Button label, echoed back as a plain message when tapped.
    pub text: String,
}

/// `getUpdates` request body.
#[derive(Debug, Serialize)]
pub struct GetUpdatesRequest {
    /// First update id to return.
    pub offset: i64,
    /// Long-poll timeout in seconds.
    pub timeout: u64,
}
