//! Integration tests for the dispatch pipeline.

use stickerlock_bot::{CommandEngine, Outcome, Pipeline};
use stickerlock_core::{ChatMessage, ContentKind, ModerationState, UserId, Username};
use stickerlock_store::MemoryStore;

const ADMIN: i64 = 1001;
const MEMBER: i64 = 5005;

fn seeded_pipeline() -> (Pipeline<MemoryStore>, MemoryStore) {
    let state = ModerationState::new(vec![UserId::from(ADMIN)], vec![]);
    let store = MemoryStore::new(state.clone());
    let engine = CommandEngine::new(state, store.clone());
    (Pipeline::standard(engine), store)
}

fn text_from(sender: i64, username: &str, text: &str) -> ChatMessage {
    ChatMessage::new(
        UserId::from(sender),
        Some(Username::new(username)),
        Some(text.to_string()),
        None,
    )
}

fn content_from(sender: i64, username: &str, kind: ContentKind) -> ChatMessage {
    ChatMessage::new(
        UserId::from(sender),
        Some(Username::new(username)),
        None,
        kind,
    )
}

#[tokio::test]
async fn test_plain_text_produces_no_action() {
    let (mut pipeline, _store) = seeded_pipeline();
    let outcome = pipeline
        .dispatch(&text_from(MEMBER, "carol", "good morning"))
        .await;
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_unrestricted_content_passes() {
    let (mut pipeline, _store) = seeded_pipeline();
    let outcome = pipeline
        .dispatch(&content_from(MEMBER, "carol", ContentKind::Sticker))
        .await;
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_command_produces_reply() {
    let (mut pipeline, _store) = seeded_pipeline();
    let outcome = pipeline.dispatch(&text_from(MEMBER, "carol", "/help")).await;
    match outcome {
        Some(Outcome::Reply(text)) => assert!(text.contains("/ulock")),
        other => panic!("expected a reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_arguments_produce_usage_reply() {
    let (mut pipeline, _store) = seeded_pipeline();
    let outcome = pipeline
        .dispatch(&text_from(ADMIN, "admin", "/ulock alice"))
        .await;
    match outcome {
        Some(Outcome::Reply(text)) => assert!(text.contains("Correct usage")),
        other => panic!("expected a usage reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_restricted_content_is_suppressed_after_ulock() {
    let (mut pipeline, _store) = seeded_pipeline();

    pipeline
        .dispatch(&text_from(ADMIN, "admin", "/ulock sticker carol"))
        .await;

    let sticker = pipeline
        .dispatch(&content_from(MEMBER, "carol", ContentKind::Sticker))
        .await;
    assert_eq!(sticker, Some(Outcome::Suppress));

    // The untouched kind still passes.
    let gif = pipeline
        .dispatch(&content_from(MEMBER, "carol", ContentKind::AnimatedImage))
        .await;
    assert_eq!(gif, None);
}

#[tokio::test]
async fn test_freed_user_posts_again() {
    let (mut pipeline, _store) = seeded_pipeline();

    pipeline
        .dispatch(&text_from(ADMIN, "admin", "/ulock all carol"))
        .await;
    pipeline
        .dispatch(&text_from(ADMIN, "admin", "/free @carol"))
        .await;

    let sticker = pipeline
        .dispatch(&content_from(MEMBER, "carol", ContentKind::Sticker))
        .await;
    assert_eq!(sticker, None);
}

#[tokio::test]
async fn test_suppression_runs_before_command_handling() {
    let (mut pipeline, _store) = seeded_pipeline();

    pipeline
        .dispatch(&text_from(ADMIN, "admin", "/ulock sticker carol"))
        .await;

    // A restricted sender's sticker is removed even when its caption looks
    // like a command; the command stage never sees it.
    let message = ChatMessage::new(
        UserId::from(MEMBER),
        Some(Username::new("carol")),
        Some("/help".to_string()),
        ContentKind::Sticker,
    );
    let outcome = pipeline.dispatch(&message).await;
    assert_eq!(outcome, Some(Outcome::Suppress));
}

#[tokio::test]
async fn test_anonymous_content_is_never_suppressed() {
    let (mut pipeline, _store) = seeded_pipeline();

    pipeline
        .dispatch(&text_from(ADMIN, "admin", "/ulock all carol"))
        .await;

    let message = ChatMessage::new(UserId::from(MEMBER), None, None, ContentKind::Sticker);
    let outcome = pipeline.dispatch(&message).await;
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_denied_command_writes_nothing() {
    let (mut pipeline, store) = seeded_pipeline();

    let outcome = pipeline
        .dispatch(&text_from(MEMBER, "carol", "/addadmin 4004"))
        .await;
    match outcome {
        Some(Outcome::Reply(text)) => assert!(text.contains("sudo")),
        other => panic!("expected a denial reply, got {:?}", other),
    }
    assert!(!pipeline.engine().state().is_admin(UserId::from(4004)));
    assert_eq!(store.save_count(), 0);
}
