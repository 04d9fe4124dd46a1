//! End-to-end flow tests: router transitions, fanout, and supply retries,
//! against a real store and recording fakes.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{
    FailingWordSource, StaticDictionary, StaticWordSource, TestHarness,
};
use wordcast_bot::delivery::{deliver_word, DeliveryOutcome};
use wordcast_bot::fanout::send_daily_words;
use wordcast_bot::router::handle_update;
use wordcast_bot::telegram::types::{Chat, Message};
use wordcast_bot::telegram::Update;
use wordcast_bot::{supply, BotError};
use wordcast_core::ChatId;
use wordcast_store::Store;

fn text_update(chat_id: i64, text: &str) -> Update {
    Update {
        update_id: 1,
        message: Some(Message {
            chat: Chat { id: chat_id },
            text: Some(text.to_string()),
        }),
    }
}

#[tokio::test]
async fn start_presents_opt_in_prompt() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());

    handle_update(harness.state.clone(), text_update(1, "/start")).await;

    let prompts = harness.messenger.prompts.lock().unwrap().clone();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].0, ChatId::new(1));
    assert_eq!(prompts[0].2, vec!["Yes", "No"]);
    // The prompt alone changes nothing.
    assert!(!harness.store.is_subscribed(ChatId::new(1)).unwrap());
}

#[tokio::test]
async fn yes_twice_yields_one_subscriber() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());

    handle_update(harness.state.clone(), text_update(1, "yes")).await;
    handle_update(harness.state.clone(), text_update(1, "Yes")).await;

    assert_eq!(harness.store.list_subscribers().unwrap().len(), 1);

    let replies = harness.messenger.sent_to(ChatId::new(1));
    assert!(replies[0].contains("now subscribed"));
    assert!(replies[1].contains("already subscribed"));
}

#[tokio::test]
async fn no_keeps_chat_unsubscribed() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());

    handle_update(harness.state.clone(), text_update(1, "no")).await;

    assert!(!harness.store.is_subscribed(ChatId::new(1)).unwrap());
    let replies = harness.messenger.sent_to(ChatId::new(1));
    assert!(replies[0].contains("no problem"));
}

#[tokio::test]
async fn stop_when_not_subscribed_deletes_nothing() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());
    harness.store.subscribe(ChatId::new(2)).unwrap();

    handle_update(harness.state.clone(), text_update(1, "/stop")).await;

    let replies = harness.messenger.sent_to(ChatId::new(1));
    assert!(replies[0].contains("not currently subscribed"));
    // The other chat's record is untouched.
    assert_eq!(harness.store.list_subscribers().unwrap().len(), 1);
}

#[tokio::test]
async fn stop_removes_subscription() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());
    harness.store.subscribe(ChatId::new(1)).unwrap();

    handle_update(harness.state.clone(), text_update(1, "/stop")).await;

    assert!(!harness.store.is_subscribed(ChatId::new(1)).unwrap());
    let replies = harness.messenger.sent_to(ChatId::new(1));
    assert!(replies[0].contains("unsubscribed"));
}

#[tokio::test]
async fn unknown_text_gets_help_prompt() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());

    handle_update(harness.state.clone(), text_update(1, "what is this")).await;

    let replies = harness.messenger.sent_to(ChatId::new(1));
    assert!(replies[0].contains("/start"));
    assert!(replies[0].contains("/getwordmeaning"));
}

#[tokio::test]
async fn getwordmeaning_delivers_to_requester_without_subscription() {
    let harness = TestHarness::new(
        StaticWordSource::default(),
        StaticDictionary::with_noun(&[("hello", "a greeting")]),
    );
    harness.store.append_words(&["hello".into()]).unwrap();

    handle_update(harness.state.clone(), text_update(9, "/getwordmeaning")).await;

    let replies = harness.messenger.sent_to(ChatId::new(9));
    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("hello"));
    assert!(replies[0].contains("(noun) a greeting"));
    assert!(!harness.store.is_subscribed(ChatId::new(9)).unwrap());
}

#[tokio::test]
async fn fanout_consumes_one_word_per_subscriber() {
    let harness = TestHarness::new(
        StaticWordSource::default(),
        StaticDictionary::with_noun(&[("a", "first"), ("b", "second"), ("c", "third")]),
    );
    harness
        .store
        .append_words(&["a".into(), "b".into(), "c".into()])
        .unwrap();
    harness.store.subscribe(ChatId::new(1)).unwrap();
    harness.store.subscribe(ChatId::new(2)).unwrap();

    let report = send_daily_words(&harness.state).await.unwrap();

    assert_eq!(report.subscribers, 2);
    assert_eq!(report.delivered, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(harness.messenger.sent_count(), 2);
    assert_eq!(harness.store.unused_word_count().unwrap(), 1);

    // Words go out oldest first.
    assert!(harness.messenger.sent_to(ChatId::new(1))[0].contains("Word: a"));
    assert!(harness.messenger.sent_to(ChatId::new(2))[0].contains("Word: b"));
}

#[tokio::test]
async fn fanout_isolates_per_subscriber_failures() {
    let harness = TestHarness::new(
        StaticWordSource::default(),
        StaticDictionary::with_noun(&[("a", "first"), ("b", "second")]),
    );
    harness
        .store
        .append_words(&["a".into(), "b".into()])
        .unwrap();
    harness.store.subscribe(ChatId::new(1)).unwrap();
    harness.store.subscribe(ChatId::new(2)).unwrap();
    harness.messenger.fail_for(ChatId::new(1));

    let report = send_daily_words(&harness.state).await.unwrap();

    assert_eq!(report.delivered, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(harness.messenger.sent_to(ChatId::new(2)).len(), 1);
}

#[tokio::test]
async fn fanout_with_exhausted_pool_skips_remaining_subscribers() {
    let harness = TestHarness::new(
        StaticWordSource::default(),
        StaticDictionary::with_noun(&[("only", "sole")]),
    );
    harness.store.append_words(&["only".into()]).unwrap();
    harness.store.subscribe(ChatId::new(1)).unwrap();
    harness.store.subscribe(ChatId::new(2)).unwrap();

    let report = send_daily_words(&harness.state).await.unwrap();

    assert_eq!(report.delivered, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(harness.messenger.sent_count(), 1);
}

#[tokio::test]
async fn delivery_consumes_word_even_without_definition() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());
    harness.store.append_words(&["obscure".into()]).unwrap();

    let outcome = deliver_word(
        harness.store.as_ref(),
        harness.state.dictionary.as_ref(),
        harness.state.messenger.as_ref(),
        ChatId::new(1),
    )
    .await
    .unwrap();

    assert_eq!(outcome, DeliveryOutcome::NoDefinition);
    assert_eq!(harness.messenger.sent_count(), 0);
    assert_eq!(harness.store.unused_word_count().unwrap(), 0);
}

#[tokio::test]
async fn supply_inserts_full_batch_unused() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());
    let source = StaticWordSource::new(&[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
    ]);

    let count = supply::replenish(&source, harness.store.as_ref())
        .await
        .unwrap();

    assert_eq!(count, 10);
    assert_eq!(harness.store.unused_word_count().unwrap(), 10);
}

#[tokio::test(start_paused = true)]
async fn supply_gives_up_after_bounded_retries() {
    let harness = TestHarness::new(StaticWordSource::default(), StaticDictionary::default());
    let source = Arc::new(FailingWordSource::default());

    let result = supply::replenish(source.as_ref(), harness.store.as_ref()).await;

    assert!(matches!(
        result,
        Err(BotError::SupplyFailed { attempts: 3, .. })
    ));
    assert_eq!(source.attempts.load(Ordering::SeqCst), 3);
    assert_eq!(harness.store.unused_word_count().unwrap(), 0);
}
