//! Event types crossing the presentation boundary.
//!
//! The orchestrator consumes [`UserEvent`]s from whatever front-end drives
//! the conversation and emits [`SessionEvent`]s describing what happened.
//! Failures surface as [`SessionEvent::StepFailed`]; no error type crosses
//! this boundary.

/// An input event produced by the presentation layer for one turn.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// Free-form text typed by the user.
    Message(String),

    /// A reference image, optionally accompanied by a text message.
    ImageUploaded {
        /// Raw PNG bytes of the uploaded image.
        bytes: Vec<u8>,
        /// Optional text sent alongside the image.
        message: Option<String>,
    },

    /// The user picked a template from the prompt library.
    TemplateSelected(String),

    /// The user asked to render the finalized prompt.
    GenerateImageRequested,
}

/// An output event describing a state change the presentation layer
/// should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new assistant turn was appended to the transcript.
    AssistantTurnAdded(String),

    /// A creative suggestion accompanying the latest question.
    RecommendationAdded(String),

    /// The session produced (or replaced) its final prompt.
    PromptFinalized(String),

    /// Image generation succeeded; the URL points at the result.
    ImageReady(String),

    /// The turn could not complete; session state is unchanged.
    StepFailed(String),
}
