//! Subscriber registry record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ChatId;

/// A chat session subscribed to the daily word.
///
/// At most one record exists per chat id. Created when the user opts in,
/// deleted when the user issues the stop command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    /// The chat session this subscription delivers to.
    pub chat_id: ChatId,

    /// When the subscription was created.
    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    /// Create a new subscription for a chat session.
    #[must_use]
    pub fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            subscribed_at: Utc::now(),
        }
    }
}
