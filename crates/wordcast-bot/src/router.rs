//! Command and message routing.
//!
//! Per chat session the bot knows two states, unsubscribed and subscribed;
//! the only transitions are an affirmative "yes" reply (subscribe) and the
//! stop command (unsubscribe).

use std::sync::Arc;

use wordcast_core::ChatId;

use crate::delivery::deliver_word;
use crate::error::BotError;
use crate::state::AppState;
use crate::supply;
use crate::telegram::Update;

const CMD_START: &str = "/start";
const CMD_STOP: &str = "/stop";
const CMD_GET_WORD: &str = "/getwordmeaning";

const PROMPT_OPT_IN: &str = "Want to start receiving a word daily?";
const REPLY_SUBSCRIBED: &str =
    "You are now subscribed to receive a word daily! please type /stop to unsubscribe";
const REPLY_ALREADY_SUBSCRIBED: &str = "You are already subscribed.";
const REPLY_DECLINED: &str = "Okay, no problem. You won't receive daily words.";
const REPLY_UNSUBSCRIBED: &str = "You have been unsubscribed. To subscribe again, use /start.";
const REPLY_NOT_SUBSCRIBED: &str = "You are not currently subscribed.";
const REPLY_HELP: &str =
    "Welcome! To start receiving a word daily, please type /start or type /getwordmeaning for trial.";
const REPLY_ERROR: &str = "An error occurred while fetching and processing word meanings.";

/// Handle one inbound update. Never fails: handler errors are logged and a
/// generic apology is sent to the chat.
pub async fn handle_update(state: Arc<AppState>, update: Update) {
    let Some(message) = update.message else {
        return;
    };
    let Some(text) = message.text else {
        return;
    };
    let chat_id = ChatId::new(message.chat.id);

    if let Err(error) = route(&state, chat_id, text.trim()).await {
        tracing::error!(%error, %chat_id, "command handler failed");
        if let Err(error) = state.messenger.send_message(chat_id, REPLY_ERROR).await {
            tracing::warn!(%error, %chat_id, "failed to send apology message");
        }
    }
}

async fn route(state: &Arc<AppState>, chat_id: ChatId, text: &str) -> Result<(), BotError> {
    match text {
        CMD_START => {
            state
                .messenger
                .send_prompt(chat_id, PROMPT_OPT_IN, &["Yes", "No"])
                .await?;
        }
        CMD_STOP => {
            let reply = if state.store.unsubscribe(chat_id)? {
                REPLY_UNSUBSCRIBED
            } else {
                REPLY_NOT_SUBSCRIBED
            };
            state.messenger.send_message(chat_id, reply).await?;
        }
        CMD_GET_WORD => {
            // Decoupled background refill; the response path does not wait
            // for it or depend on its outcome.
            let refill_state = Arc::clone(state);
            tokio::spawn(async move {
                if let Err(error) =
                    supply::replenish(refill_state.words.as_ref(), refill_state.store.as_ref())
                        .await
                {
                    tracing::error!(%error, "background word refill failed");
                }
            });

            deliver_word(
                state.store.as_ref(),
                state.dictionary.as_ref(),
                state.messenger.as_ref(),
                chat_id,
            )
            .await?;
        }
        _ => match text.to_lowercase().as_str() {
            "yes" => {
                let reply = if state.store.subscribe(chat_id)? {
                    REPLY_SUBSCRIBED
                } else {
                    REPLY_ALREADY_SUBSCRIBED
                };
                state.messenger.send_message(chat_id, reply).await?;
            }
            "no" => {
                state.messenger.send_message(chat_id, REPLY_DECLINED).await?;
            }
            _ => {
                state.messenger.send_message(chat_id, REPLY_HELP).await?;
            }
        },
    }

    Ok(())
}
