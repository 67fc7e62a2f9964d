//! Prompt assembler: pure request constructors, one per purpose.
//!
//! Every function here is side-effect-free and deterministic: the same
//! transcript and context always produce a structurally identical request.
//! Each produced request starts with a system message, which is the
//! well-formedness guarantee the completion client relies on.

use crate::domain::conversation::Transcript;
use crate::domain::prompt::image::EncodedImage;
use crate::ports::{ChatMessage, CompletionRequest, ContentPart, ImageUrl};

/// Visual aspects cycled through by successive clarifying questions.
pub const ASPECT_ROTATION: [&str; 6] =
    ["colors", "textures", "shapes", "lighting", "depth", "style"];

const QUESTION_SYSTEM_TEXT: &str =
    "You are a creative assistant who generates insightful follow-up questions \
     to refine an image concept.";

const RECOMMENDATION_SYSTEM_TEXT: &str =
    "You are a creative assistant who generates concise recommendations.";

const FINALIZE_SYSTEM_TEXT: &str =
    "You are an AI assistant that creates detailed, assumption-free image \
     prompts from conversations.";

const MODIFY_SYSTEM_TEXT: &str =
    "You are skilled at updating image descriptions, changing only what the \
     user asks for.";

const EXPLANATION_SYSTEM_TEXT: &str = "You are a helpful assistant that describes images.";

const QUESTION_TEMPERATURE: f32 = 0.8;
const QUESTION_MAX_TOKENS: u32 = 750;
const RECOMMENDATION_TEMPERATURE: f32 = 0.8;
const RECOMMENDATION_MAX_TOKENS: u32 = 150;
const FINALIZE_TEMPERATURE: f32 = 0.7;
const FINALIZE_MAX_TOKENS: u32 = 750;
const MODIFY_TEMPERATURE: f32 = 0.7;
const MODIFY_MAX_TOKENS: u32 = 150;
const EXPLANATION_TEMPERATURE: f32 = 0.7;
const EXPLANATION_MAX_TOKENS: u32 = 300;

/// Builds a request for exactly one follow-up question about a single
/// visual aspect, chosen from [`ASPECT_ROTATION`] by the question index.
/// The system text is constant across calls; only the rotated aspect and
/// the conversation context vary.
pub fn question_request(
    last_user_input: &str,
    transcript: &Transcript,
    question_index: u8,
) -> CompletionRequest {
    let aspect = ASPECT_ROTATION[question_index as usize % ASPECT_ROTATION.len()];
    let prompt = format!(
        "We are working with the initial concept:\n\"{last_user_input}\"\n\n\
         Conversation so far:\n{}\n\n\
         Ask exactly one follow-up question exploring the {aspect} of the \
         image. Ask about nothing else.",
        transcript.to_labelled_text(),
    );

    CompletionRequest::new(QUESTION_SYSTEM_TEXT, QUESTION_TEMPERATURE, QUESTION_MAX_TOKENS)
        .with_message(ChatMessage::user(prompt))
}

/// Builds a request for a short creative suggestion. Independent of the
/// question request: the two are issued as separate completions in the
/// same turn, never multiplexed into one response.
pub fn recommendation_request(last_user_input: &str, transcript: &Transcript) -> CompletionRequest {
    let prompt = format!(
        "We are working with the initial concept: \"{last_user_input}\". \
         Given the conversation so far:\n{}\n\
         Generate a short recommendation to inspire the user further.",
        transcript.to_labelled_text(),
    );

    CompletionRequest::new(
        RECOMMENDATION_SYSTEM_TEXT,
        RECOMMENDATION_TEMPERATURE,
        RECOMMENDATION_MAX_TOKENS,
    )
    .with_message(ChatMessage::user(prompt))
}

/// Builds a request that serializes the whole transcript, role-labelled,
/// into one instruction asking for a structured image description ending
/// with a confirmation question to the user.
pub fn finalize_request(transcript: &Transcript) -> CompletionRequest {
    let prompt = format!(
        "Based on the conversation below, create a concise and detailed image \
         description. Include only details the user stated; make no \
         assumptions. End with a short question asking the user to confirm \
         the description.\n\nConversation:\n{}\n\nFinal Image Description:",
        transcript.to_labelled_text(),
    );

    CompletionRequest::new(FINALIZE_SYSTEM_TEXT, FINALIZE_TEMPERATURE, FINALIZE_MAX_TOKENS)
        .with_message(ChatMessage::user(prompt))
}

/// Builds a request that applies a single user instruction to an existing
/// prompt, changing only what the instruction specifies.
pub fn modify_request(base_prompt: &str, instruction: &str) -> CompletionRequest {
    let prompt = format!(
        "Initial Description:\n{base_prompt}\n\n\
         User Instruction:\n{instruction}\n\n\
         Update the initial description by incorporating the user's \
         instruction. Change only what the instruction asks for."
    );

    CompletionRequest::new(MODIFY_SYSTEM_TEXT, MODIFY_TEMPERATURE, MODIFY_MAX_TOKENS)
        .with_message(ChatMessage::user(prompt))
}

/// Builds a multimodal request pairing a fixed instruction with an
/// uploaded image.
pub fn image_explanation_request(image: &EncodedImage) -> CompletionRequest {
    CompletionRequest::new(
        EXPLANATION_SYSTEM_TEXT,
        EXPLANATION_TEMPERATURE,
        EXPLANATION_MAX_TOKENS,
    )
    .with_message(ChatMessage::user_parts(vec![
        ContentPart::Text {
            text: "Describe the content of this image in one coherent paragraph. \
                   Do not use lists."
                .to_string(),
        },
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: image.data_url().to_string(),
            },
        },
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Turn;
    use crate::ports::{ChatRole, MessageContent};

    fn sample_transcript() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("a red castle").unwrap());
        transcript.push(Turn::assistant("What colors should dominate?").unwrap());
        transcript.push(Turn::user("deep crimson and gold").unwrap());
        transcript
    }

    fn text_of(request: &CompletionRequest, index: usize) -> &str {
        match &request.messages[index].content {
            MessageContent::Text(text) => text,
            MessageContent::Parts(_) => panic!("expected text content"),
        }
    }

    mod well_formedness {
        use super::*;

        #[test]
        fn every_builder_produces_a_well_formed_request() {
            let transcript = sample_transcript();
            let image = EncodedImage::from_png_bytes(&[1, 2, 3]);

            for request in [
                question_request("a red castle", &transcript, 0),
                recommendation_request("a red castle", &transcript),
                finalize_request(&transcript),
                modify_request("a forest", "make it night-time"),
                image_explanation_request(&image),
            ] {
                assert!(request.is_well_formed());
                assert_eq!(request.messages[0].role, ChatRole::System);
            }
        }
    }

    mod question {
        use super::*;

        #[test]
        fn rotates_through_aspects_by_index() {
            let transcript = sample_transcript();
            let first = question_request("a red castle", &transcript, 0);
            let fourth = question_request("a red castle", &transcript, 3);
            let wrapped = question_request("a red castle", &transcript, 6);

            assert!(text_of(&first, 1).contains("colors"));
            assert!(text_of(&fourth, 1).contains("lighting"));
            // Index 6 wraps back to the first aspect.
            assert!(text_of(&wrapped, 1).contains("colors"));
        }

        #[test]
        fn system_text_is_constant_across_indices() {
            let transcript = sample_transcript();
            let a = question_request("x", &transcript, 0);
            let b = question_request("x", &transcript, 5);
            assert_eq!(a.messages[0], b.messages[0]);
        }

        #[test]
        fn includes_conversation_history() {
            let transcript = sample_transcript();
            let request = question_request("deep crimson and gold", &transcript, 1);
            assert!(text_of(&request, 1).contains("User: a red castle"));
            assert!(text_of(&request, 1).contains("deep crimson and gold"));
        }
    }

    mod recommendation {
        use super::*;

        #[test]
        fn is_independent_of_the_question_request() {
            let transcript = sample_transcript();
            let question = question_request("a red castle", &transcript, 0);
            let recommendation = recommendation_request("a red castle", &transcript);

            assert_ne!(question.messages[0], recommendation.messages[0]);
            assert_eq!(recommendation.max_tokens, 150);
        }
    }

    mod finalize {
        use super::*;

        #[test]
        fn is_deterministic_on_an_unchanged_transcript() {
            let transcript = sample_transcript();
            let first = finalize_request(&transcript);
            let second = finalize_request(&transcript);
            assert_eq!(first, second);
        }

        #[test]
        fn serializes_all_turns_role_labelled() {
            let transcript = sample_transcript();
            let request = finalize_request(&transcript);
            let text = text_of(&request, 1);
            assert!(text.contains("User: a red castle"));
            assert!(text.contains("Assistant: What colors should dominate?"));
            assert!(text.contains("User: deep crimson and gold"));
        }

        #[test]
        fn asks_for_confirmation() {
            let request = finalize_request(&sample_transcript());
            assert!(text_of(&request, 1).contains("confirm"));
        }
    }

    mod modify {
        use super::*;

        #[test]
        fn carries_base_prompt_and_instruction() {
            let request = modify_request("A mystical forest during twilight", "make it night-time");
            let text = text_of(&request, 1);
            assert!(text.contains("A mystical forest during twilight"));
            assert!(text.contains("make it night-time"));
        }
    }

    mod image_explanation {
        use super::*;

        #[test]
        fn pairs_instruction_with_image_part() {
            let image = EncodedImage::from_png_bytes(&[0xDE, 0xAD]);
            let request = image_explanation_request(&image);

            match &request.messages[1].content {
                MessageContent::Parts(parts) => {
                    assert_eq!(parts.len(), 2);
                    assert!(matches!(parts[0], ContentPart::Text { .. }));
                    match &parts[1] {
                        ContentPart::ImageUrl { image_url } => {
                            assert!(image_url.url.starts_with("data:image/png;base64,"));
                        }
                        other => panic!("expected image part, got {other:?}"),
                    }
                }
                other => panic!("expected parts content, got {other:?}"),
            }
        }

        #[test]
        fn instruction_forbids_lists() {
            let image = EncodedImage::from_png_bytes(&[1]);
            let request = image_explanation_request(&image);
            match &request.messages[1].content {
                MessageContent::Parts(parts) => match &parts[0] {
                    ContentPart::Text { text } => {
                        assert!(text.contains("one coherent paragraph"));
                        assert!(text.contains("Do not use lists"));
                    }
                    other => panic!("expected text part, got {other:?}"),
                },
                other => panic!("expected parts content, got {other:?}"),
            }
        }
    }
}
