//! Subscriber fanout: deliver a word to every current subscriber.

use crate::delivery::{deliver_word, DeliveryOutcome};
use crate::error::BotError;
use crate::state::AppState;

/// Tally of one fanout run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FanoutReport {
    /// Subscribers at the start of the run.
    pub subscribers: usize,
    /// Messages actually sent.
    pub delivered: usize,
    /// Subscribers skipped (pool exhausted or no definition).
    pub skipped: usize,
    /// Subscribers whose delivery errored.
    pub failed: usize,
}

/// Deliver one word to each subscriber, sequentially.
///
/// Each subscriber consumes one unused word from the shared pool. Failures
/// are isolated per subscriber: a failing delivery is logged and the run
/// continues with the next subscriber; the batch is never re-run.
///
/// # Errors
///
/// Returns an error only if the subscriber list itself cannot be read.
pub async fn send_daily_words(state: &AppState) -> Result<FanoutReport, BotError> {
    let subscribers = state.store.list_subscribers()?;
    let unused = state.store.unused_word_count()?;

    let mut report = FanoutReport {
        subscribers: subscribers.len(),
        ..FanoutReport::default()
    };

    tracing::info!(subscribers = report.subscribers, unused, "starting daily fanout");

    for subscriber in subscribers {
        match deliver_word(
            state.store.as_ref(),
            state.dictionary.as_ref(),
            state.messenger.as_ref(),
            subscriber.chat_id,
        )
        .await
        {
            Ok(DeliveryOutcome::Sent) => report.delivered += 1,
            Ok(DeliveryOutcome::PoolExhausted | DeliveryOutcome::NoDefinition) => {
                report.skipped += 1;
            }
            Err(error) => {
                report.failed += 1;
                tracing::error!(%error, chat_id = %subscriber.chat_id, "delivery failed, continuing with next subscriber");
            }
        }
    }

    tracing::info!(
        delivered = report.delivered,
        skipped = report.skipped,
        failed = report.failed,
        "daily fanout finished"
    );

    Ok(report)
}
