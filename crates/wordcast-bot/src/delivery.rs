//! Single-chat delivery: claim a word, look it up, format, send.

use wordcast_core::{render_daily_word, ChatId};
use wordcast_store::Store;

use crate::error::BotError;
use crate::providers::Dictionary;
use crate::telegram::Messenger;

/// What happened for one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// A word was claimed, defined, and sent.
    Sent,
    /// The pool had no unused words; nothing was sent.
    PoolExhausted,
    /// A word was claimed (and stays consumed) but no definition was found;
    /// nothing was sent.
    NoDefinition,
}

/// Run one allocation + lookup + format + deliver cycle for a chat session.
///
/// A claimed word with no definition is consumed anyway: the claim is
/// exactly-once and records are never returned to the pool.
///
/// # Errors
///
/// Returns an error if the claim or the send fails. Dictionary failures are
/// soft: they are logged and reported as [`DeliveryOutcome::NoDefinition`].
pub async fn deliver_word(
    store: &dyn Store,
    dictionary: &dyn Dictionary,
    messenger: &dyn Messenger,
    chat_id: ChatId,
) -> Result<DeliveryOutcome, BotError> {
    let Some(record) = store.claim_next_word()? else {
        tracing::warn!(%chat_id, "word pool exhausted, nothing to deliver");
        return Ok(DeliveryOutcome::PoolExhausted);
    };

    let entries = match dictionary.lookup(&record.word).await {
        Ok(Some(entries)) => entries,
        Ok(None) => {
            tracing::info!(word = %record.word, %chat_id, "no definition found, skipping delivery");
            return Ok(DeliveryOutcome::NoDefinition);
        }
        Err(error) => {
            tracing::warn!(%error, word = %record.word, "definition lookup failed");
            return Ok(DeliveryOutcome::NoDefinition);
        }
    };

    let message = render_daily_word(&record.word, &entries);
    messenger.send_message(chat_id, &message).await?;

    tracing::info!(word = %record.word, %chat_id, "daily word delivered");
    Ok(DeliveryOutcome::Sent)
}
