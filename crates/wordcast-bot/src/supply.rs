//! Word supply service: refills the pool from the random-word provider.

use std::time::Duration;

use wordcast_store::Store;

use crate::error::BotError;
use crate::providers::WordSource;

/// Words requested per refill.
pub const SUPPLY_BATCH_SIZE: usize = 10;

/// Attempts before a refill is reported as failed.
const MAX_ATTEMPTS: u32 = 3;

/// Backoff before the second attempt; doubles per retry.
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Fetch a batch of random words and append them to the pool.
///
/// Retries the whole fetch-and-append up to [`MAX_ATTEMPTS`] times with
/// doubling backoff, then gives up with [`BotError::SupplyFailed`]. Returns
/// the number of words appended.
///
/// # Errors
///
/// Returns `BotError::SupplyFailed` once every attempt has failed.
pub async fn replenish(source: &dyn WordSource, store: &dyn Store) -> Result<usize, BotError> {
    let mut backoff = INITIAL_BACKOFF;

    for attempt in 1..=MAX_ATTEMPTS {
        match try_replenish(source, store).await {
            Ok(count) => {
                tracing::info!(count, attempt, "word pool replenished");
                return Ok(count);
            }
            Err(error) if attempt == MAX_ATTEMPTS => {
                tracing::error!(%error, attempts = MAX_ATTEMPTS, "word supply exhausted retries");
                return Err(BotError::SupplyFailed {
                    attempts: MAX_ATTEMPTS,
                    last: Box::new(error),
                });
            }
            Err(error) => {
                tracing::warn!(%error, attempt, ?backoff, "word supply attempt failed, retrying");
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }
    }

    unreachable!("retry loop either returns or errs on the last attempt")
}

async fn try_replenish(source: &dyn WordSource, store: &dyn Store) -> Result<usize, BotError> {
    let words = source.random_words(SUPPLY_BATCH_SIZE).await?;
    let ids = store.append_words(&words)?;

    for (id, word) in ids.iter().zip(&words) {
        tracing::debug!(%id, word, "word saved to pool");
    }

    Ok(ids.len())
}
