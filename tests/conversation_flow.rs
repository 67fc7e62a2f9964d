//! Integration tests for full conversation rounds.
//!
//! These tests drive the orchestrator end-to-end with mock adapters:
//! 1. A message round issues a question and a recommendation
//! 2. The question budget forces finalization on the seventh message
//! 3. Template selection short-circuits into the modification flow
//! 4. Image uploads are explained before any accompanying text
//! 5. The finalized prompt feeds the image generation boundary

use std::sync::Arc;

use proptest::prelude::*;

use prompt_loom::adapters::ai::MockCompletionClient;
use prompt_loom::adapters::image::MockImageGenerator;
use prompt_loom::application::{Orchestrator, SessionEvent, UserEvent};
use prompt_loom::domain::conversation::{DialogueState, Role, SessionState, QUESTION_BUDGET};

fn orchestrator(
    client: MockCompletionClient,
) -> Orchestrator<MockCompletionClient, MockImageGenerator> {
    Orchestrator::new(
        Arc::new(client),
        Arc::new(MockImageGenerator::returning("https://img.test/out.png")),
    )
}

/// Queues one question and one recommendation response per round.
fn client_for_rounds(rounds: u8) -> MockCompletionClient {
    let mut client = MockCompletionClient::new();
    for i in 0..rounds {
        client = client
            .with_response(format!("Question {}?", i + 1))
            .with_response(format!("Suggestion {}.", i + 1));
    }
    client
}

#[tokio::test]
async fn full_round_finalizes_on_the_seventh_message() {
    let client = client_for_rounds(QUESTION_BUDGET)
        .with_response("A red castle at dusk, weathered stone, warm light. Shall I generate it?");
    let orchestrator = orchestrator(client);
    let mut session = SessionState::new();

    let events = orchestrator
        .handle_event(&mut session, UserEvent::Message("a red castle".to_string()))
        .await;
    assert_eq!(session.question_count(), 1);
    assert!(session.awaiting_follow_up());
    assert_eq!(session.dialogue_state(), DialogueState::AwaitingUserReply);
    assert_eq!(
        events[0],
        SessionEvent::AssistantTurnAdded("Question 1?".to_string())
    );

    for i in 1..QUESTION_BUDGET {
        orchestrator
            .handle_event(&mut session, UserEvent::Message(format!("answer {i}")))
            .await;
    }
    assert_eq!(session.question_count(), QUESTION_BUDGET);
    assert!(session.final_prompt().is_none());

    let events = orchestrator
        .handle_event(&mut session, UserEvent::Message("that's enough".to_string()))
        .await;

    assert_eq!(session.dialogue_state(), DialogueState::Finalized);
    assert_eq!(
        session.final_prompt(),
        Some("A red castle at dusk, weathered stone, warm light. Shall I generate it?")
    );
    // Still six questions; the seventh message never asks.
    assert_eq!(session.question_count(), QUESTION_BUDGET);
    assert!(events.iter().any(|e| matches!(e, SessionEvent::PromptFinalized(_))));

    // Each question round stored its recommendation against the question turn.
    assert_eq!(session.recommendations().len(), QUESTION_BUDGET as usize);
}

#[tokio::test]
async fn template_round_modifies_and_clears_the_template() {
    let client = client_for_rounds(1)
        .with_response("A mystical forest with glowing plants, under a night sky");
    let orchestrator = orchestrator(client);
    let mut session = SessionState::new();

    // Start a question thread, then abandon it for a template.
    orchestrator
        .handle_event(&mut session, UserEvent::Message("a forest".to_string()))
        .await;
    assert!(session.awaiting_follow_up());

    orchestrator
        .handle_event(
            &mut session,
            UserEvent::TemplateSelected("A mystical forest with glowing plants".to_string()),
        )
        .await;
    assert!(!session.awaiting_follow_up());
    assert_eq!(session.dialogue_state(), DialogueState::TemplateSelected);

    let events = orchestrator
        .handle_event(
            &mut session,
            UserEvent::Message("make it night-time".to_string()),
        )
        .await;

    assert_eq!(
        session.final_prompt(),
        Some("A mystical forest with glowing plants, under a night sky")
    );
    assert!(session.selected_template().is_none());
    assert_eq!(session.dialogue_state(), DialogueState::Finalized);
    // The abandoned question thread never resumed.
    assert_eq!(session.question_count(), 1);
    assert!(events.contains(&SessionEvent::PromptFinalized(
        "A mystical forest with glowing plants, under a night sky".to_string()
    )));
}

#[tokio::test]
async fn image_upload_with_text_explains_then_finalizes() {
    let client = MockCompletionClient::new()
        .with_response("A watercolor painting of a lighthouse on a rocky coast.")
        .with_response("A lighthouse on a rocky coast, watercolor style. Look right?");
    let orchestrator = orchestrator(client);
    let mut session = SessionState::new();

    orchestrator
        .handle_event(
            &mut session,
            UserEvent::ImageUploaded {
                bytes: vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a],
                message: Some("something in this style".to_string()),
            },
        )
        .await;

    // Explanation always lands before the accompanying text.
    let turns = session.transcript().turns();
    assert_eq!(turns[0].role(), Role::Assistant);
    assert_eq!(turns[1].role(), Role::User);
    assert_eq!(turns[1].content(), "something in this style");

    assert_eq!(session.dialogue_state(), DialogueState::Finalized);
    // Uploads bypass the question budget entirely.
    assert_eq!(session.question_count(), 0);
}

#[tokio::test]
async fn finalized_prompt_feeds_image_generation() {
    let generator = Arc::new(MockImageGenerator::returning("https://img.test/castle.png"));
    let client = client_for_rounds(QUESTION_BUDGET)
        .with_response("A red castle at dusk. Shall I generate it?");
    let orchestrator = Orchestrator::new(Arc::new(client), generator.clone());
    let mut session = SessionState::new();

    for i in 0..=QUESTION_BUDGET {
        orchestrator
            .handle_event(&mut session, UserEvent::Message(format!("turn {i}")))
            .await;
    }
    assert!(session.final_prompt().is_some());

    let events = orchestrator
        .handle_event(&mut session, UserEvent::GenerateImageRequested)
        .await;

    assert_eq!(
        events,
        vec![SessionEvent::ImageReady("https://img.test/castle.png".to_string())]
    );
    assert_eq!(
        generator.prompts(),
        vec!["A red castle at dusk. Shall I generate it?"]
    );
}

#[tokio::test]
async fn transport_failure_mid_round_preserves_the_session() {
    let client = client_for_rounds(2).with_exhausted_failure();
    let orchestrator = orchestrator(client);
    let mut session = SessionState::new();

    orchestrator
        .handle_event(&mut session, UserEvent::Message("a red castle".to_string()))
        .await;
    orchestrator
        .handle_event(&mut session, UserEvent::Message("dark red".to_string()))
        .await;
    let before = session.clone();

    // Third round: the question call itself exhausts its retries.
    let events = orchestrator
        .handle_event(&mut session, UserEvent::Message("stone walls".to_string()))
        .await;

    assert!(matches!(events[0], SessionEvent::StepFailed(_)));
    assert_eq!(session, before);
}

proptest! {
    // Message-only conversations: the question count rises by exactly one
    // per message until the budget, then pins there while every further
    // message finalizes.
    #[test]
    fn question_count_never_exceeds_budget(message_count in 1usize..20) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async {
            let mut client = MockCompletionClient::new();
            for i in 0..message_count {
                // Worst case every message needs two responses; extras go unused.
                client = client
                    .with_response(format!("Question or final {i}"))
                    .with_response(format!("Suggestion {i}"));
            }
            let orchestrator = orchestrator(client);
            let mut session = SessionState::new();

            for i in 1..=message_count {
                orchestrator
                    .handle_event(&mut session, UserEvent::Message(format!("msg {i}")))
                    .await;

                let capped = i.min(QUESTION_BUDGET as usize);
                prop_assert_eq!(session.question_count() as usize, capped);
                if i > QUESTION_BUDGET as usize {
                    prop_assert!(session.final_prompt().is_some());
                }
            }
            Ok(())
        })?;
    }
}
