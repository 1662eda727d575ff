//! End-to-end intake flow tests over the in-memory adapters.
//!
//! These drive the full turn sequence the way a channel adapter would:
//! one `advance` call per inbound turn, asserting on outcomes, persisted
//! state, and the outbound message transcript.

use std::sync::Arc;

use hazard_intake::adapters::{InMemoryRecordStore, RecordingMessenger, SentMessage};
use hazard_intake::application::handlers::{AdvanceTurnCommand, AdvanceTurnHandler, TurnOutcome};
use hazard_intake::domain::foundation::ConversationId;
use hazard_intake::domain::intake::{IntakeStatus, Stage};
use hazard_intake::ports::RecordStore;
use serde_json::json;

fn conversation(key: &str) -> ConversationId {
    ConversationId::new(key).unwrap()
}

fn setup() -> (
    AdvanceTurnHandler,
    Arc<InMemoryRecordStore>,
    Arc<RecordingMessenger>,
) {
    let store = Arc::new(InMemoryRecordStore::new());
    let messenger = Arc::new(RecordingMessenger::new());
    let handler = AdvanceTurnHandler::new(store.clone(), messenger.clone());
    (handler, store, messenger)
}

#[tokio::test]
async fn scripted_sequence_runs_start_to_finish() {
    let (handler, store, messenger) = setup();
    let id = conversation("e2e-full");

    // Opening turn prompts for the ID.
    let outcome = handler
        .handle(AdvanceTurnCommand::open(id.clone()))
        .await
        .unwrap();
    assert_eq!(outcome, TurnOutcome::Prompt(Stage::AwaitNationalId));

    // A malformed ID re-prompts and leaves the record untouched.
    let outcome = handler
        .handle(AdvanceTurnCommand::reply(id.clone(), "not-9-digits"))
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        TurnOutcome::Reprompt {
            stage: Stage::AwaitNationalId,
            ..
        }
    ));
    let record = store.load(&id).await.unwrap().unwrap();
    assert!(!record.has_national_id());

    // A checksum-valid ID advances to the category choice prompt.
    let outcome = handler
        .handle(AdvanceTurnCommand::reply(id.clone(), "123456782"))
        .await
        .unwrap();
    assert_eq!(outcome, TurnOutcome::Prompt(Stage::AwaitCategory));
    match messenger.sent().await.last().unwrap() {
        SentMessage::Prompt { choices, .. } => assert!(choices.is_some()),
        other => panic!("expected category prompt, got {:?}", other),
    }

    // A choice-resolved label arrives as plain text, in any case.
    let outcome = handler
        .handle(AdvanceTurnCommand::reply(id.clone(), "water LEAK"))
        .await
        .unwrap();
    assert_eq!(outcome, TurnOutcome::Prompt(Stage::AwaitDescription));

    // The final answer completes the flow.
    let outcome = handler
        .handle(AdvanceTurnCommand::reply(
            id.clone(),
            "  water pooling near the crosswalk  ",
        ))
        .await
        .unwrap();
    let case_number = match outcome {
        TurnOutcome::Completed { case_number } => case_number,
        other => panic!("expected completion, got {:?}", other),
    };

    let record = store.load(&id).await.unwrap().unwrap();
    assert_eq!(record.status, IntakeStatus::Closed);
    assert_eq!(
        record.description.as_deref(),
        Some("water pooling near the crosswalk")
    );

    // Confirmation sequence: case reference, then the acknowledgment.
    let sent = messenger.sent().await;
    let tail: Vec<_> = sent.iter().rev().take(2).collect();
    match tail[1] {
        SentMessage::Text { text, .. } => assert!(text.contains(&case_number.to_string())),
        other => panic!("expected case confirmation, got {:?}", other),
    }
    assert!(matches!(tail[0], SentMessage::Text { .. }));
}

#[tokio::test]
async fn collected_fields_are_never_prompted_again() {
    let (handler, _store, messenger) = setup();
    let id = conversation("e2e-monotonic");

    handler
        .handle(AdvanceTurnCommand::open(id.clone()))
        .await
        .unwrap();
    for input in ["123456782", "Pothole", "deep pothole by the school"] {
        handler
            .handle(AdvanceTurnCommand::reply(id.clone(), input))
            .await
            .unwrap();
    }

    // Exactly one prompt per stage across the whole conversation.
    let prompts: Vec<String> = messenger
        .sent()
        .await
        .into_iter()
        .filter_map(|m| match m {
            SentMessage::Prompt { text, .. } => Some(text),
            SentMessage::Text { .. } => None,
        })
        .collect();
    assert_eq!(prompts.len(), 3);
    let mut deduped = prompts.clone();
    deduped.dedup();
    assert_eq!(deduped, prompts);
}

#[tokio::test]
async fn completed_conversation_stays_silent() {
    let (handler, _store, messenger) = setup();
    let id = conversation("e2e-closed");

    handler
        .handle(AdvanceTurnCommand::open(id.clone()))
        .await
        .unwrap();
    for input in ["111111118", "Fallen tree", "tree across both lanes"] {
        handler
            .handle(AdvanceTurnCommand::reply(id.clone(), input))
            .await
            .unwrap();
    }
    let sent_before = messenger.sent_count().await;

    let outcome = handler
        .handle(AdvanceTurnCommand::open(id.clone()))
        .await
        .unwrap();
    assert_eq!(outcome, TurnOutcome::AlreadyClosed);

    let outcome = handler
        .handle(AdvanceTurnCommand::reply(id, "hello again"))
        .await
        .unwrap();
    assert_eq!(outcome, TurnOutcome::AlreadyClosed);

    assert_eq!(messenger.sent_count().await, sent_before);
}

#[tokio::test]
async fn seeded_conversation_resumes_at_first_uncollected_field() {
    let (handler, _store, _messenger) = setup();

    let outcome = handler
        .handle(
            AdvanceTurnCommand::open(conversation("e2e-seeded")).with_seed(json!({
                "national_id": "123456782",
                "category": "Blocked drain",
            })),
        )
        .await
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Prompt(Stage::AwaitDescription));
}

#[tokio::test]
async fn fully_populated_record_completes_on_first_turn() {
    let (handler, _store, messenger) = setup();

    let outcome = handler
        .handle(
            AdvanceTurnCommand::open(conversation("e2e-prefilled")).with_seed(json!({
                "national_id": "000000000",
                "category": "Garbage overflow",
                "description": "bins overflowing since Monday",
            })),
        )
        .await
        .unwrap();

    assert!(matches!(outcome, TurnOutcome::Completed { .. }));
    // No prompt was ever issued, only the confirmation texts.
    assert!(messenger
        .sent()
        .await
        .iter()
        .all(|m| matches!(m, SentMessage::Text { .. })));
}

#[tokio::test]
async fn parallel_conversations_do_not_interfere() {
    let (handler, store, _messenger) = setup();
    let first = conversation("e2e-parallel-1");
    let second = conversation("e2e-parallel-2");

    handler
        .handle(AdvanceTurnCommand::open(first.clone()))
        .await
        .unwrap();
    handler
        .handle(AdvanceTurnCommand::reply(first.clone(), "123456782"))
        .await
        .unwrap();
    handler
        .handle(AdvanceTurnCommand::open(second.clone()))
        .await
        .unwrap();

    let first_record = store.load(&first).await.unwrap().unwrap();
    let second_record = store.load(&second).await.unwrap().unwrap();
    assert!(first_record.has_national_id());
    assert!(!second_record.has_national_id());
}
