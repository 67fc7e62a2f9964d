//! Per-session conversation state.
//!
//! The mutable state of one conversation, held as an explicit value owned
//! by its session rather than hidden in a UI framework. One instance per
//! active conversation; no cross-session sharing, so no locking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::conversation::errors::DomainError;
use crate::domain::conversation::message::{Transcript, Turn};
use crate::domain::conversation::state::DialogueState;

/// Fixed cap on clarifying questions asked per round before forced
/// finalization.
pub const QUESTION_BUDGET: u8 = 6;

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A creative suggestion stored alongside the question turn it accompanied.
///
/// Optional output: never load-bearing for finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Index of the question turn in the transcript.
    pub turn_index: usize,
    /// Suggestion text.
    pub content: String,
}

/// Mutable conversation state for one session.
///
/// # Invariants
///
/// - `question_count` only increases, only while no template is selected,
///   and never exceeds [`QUESTION_BUDGET`]
/// - `final_prompt` is set only by finalization or template modification
/// - selecting a template clears `awaiting_follow_up`
/// - the transcript is append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    id: SessionId,
    transcript: Transcript,
    question_count: u8,
    selected_template: Option<String>,
    final_prompt: Option<String>,
    awaiting_follow_up: bool,
    recommendations: Vec<Recommendation>,
    generated_image_url: Option<String>,
    dialogue_state: DialogueState,
}

impl SessionState {
    /// Creates a fresh session in the `Idle` state.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            transcript: Transcript::new(),
            question_count: 0,
            selected_template: None,
            final_prompt: None,
            awaiting_follow_up: false,
            recommendations: Vec::new(),
            generated_image_url: None,
            dialogue_state: DialogueState::Idle,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the number of clarifying questions asked this round.
    pub fn question_count(&self) -> u8 {
        self.question_count
    }

    /// Returns true if another clarifying question may be asked.
    pub fn question_budget_remaining(&self) -> bool {
        self.question_count < QUESTION_BUDGET
    }

    /// Returns the currently selected library template, if any.
    pub fn selected_template(&self) -> Option<&str> {
        self.selected_template.as_deref()
    }

    /// Returns the finalized prompt, if one exists.
    pub fn final_prompt(&self) -> Option<&str> {
        self.final_prompt.as_deref()
    }

    /// Returns true while an issued question has not yet received a reply.
    pub fn awaiting_follow_up(&self) -> bool {
        self.awaiting_follow_up
    }

    /// Returns the stored recommendations, in arrival order.
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Returns the recommendation attached to the given transcript index.
    pub fn recommendation_for(&self, turn_index: usize) -> Option<&Recommendation> {
        self.recommendations
            .iter()
            .find(|r| r.turn_index == turn_index)
    }

    /// Returns the most recently generated image URL, if any.
    pub fn generated_image_url(&self) -> Option<&str> {
        self.generated_image_url.as_deref()
    }

    /// Returns the current dialogue state.
    pub fn dialogue_state(&self) -> DialogueState {
        self.dialogue_state
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutators (invariant-enforcing)
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a turn to the transcript, returning its index.
    pub fn push_turn(&mut self, turn: Turn) -> usize {
        self.transcript.push(turn);
        self.transcript.len() - 1
    }

    /// Records that a clarifying question was asked: increments the
    /// counter, marks the follow-up pending, and enters
    /// `AwaitingUserReply`.
    ///
    /// # Errors
    ///
    /// - `QuestionBudgetExhausted` if the budget is already spent
    /// - `Validation` if a template is selected (templates short-circuit
    ///   the question flow)
    pub fn note_question_asked(&mut self) -> Result<(), DomainError> {
        if self.selected_template.is_some() {
            return Err(DomainError::validation(
                "question_count",
                "cannot ask questions while a template is selected",
            ));
        }
        if self.question_count >= QUESTION_BUDGET {
            return Err(DomainError::QuestionBudgetExhausted {
                budget: QUESTION_BUDGET,
            });
        }

        self.dialogue_state = self
            .dialogue_state
            .transition_to(DialogueState::AwaitingUserReply)?;
        self.question_count += 1;
        self.awaiting_follow_up = true;
        Ok(())
    }

    /// Stores a recommendation keyed to the question turn it accompanied.
    pub fn add_recommendation(&mut self, turn_index: usize, content: impl Into<String>) {
        self.recommendations.push(Recommendation {
            turn_index,
            content: content.into(),
        });
    }

    /// Selects a library template, abandoning any in-progress question
    /// thread, and enters `TemplateSelected`.
    pub fn select_template(&mut self, template: impl Into<String>) -> Result<(), DomainError> {
        self.dialogue_state = self
            .dialogue_state
            .transition_to(DialogueState::TemplateSelected)?;
        self.selected_template = Some(template.into());
        self.awaiting_follow_up = false;
        Ok(())
    }

    /// Sets the final prompt and enters `Finalized`. Supersedes any
    /// previous final prompt; clears the selected template and the pending
    /// follow-up.
    pub fn finalize(&mut self, prompt: impl Into<String>) -> Result<(), DomainError> {
        self.dialogue_state = self.dialogue_state.transition_to(DialogueState::Finalized)?;
        self.final_prompt = Some(prompt.into());
        self.selected_template = None;
        self.awaiting_follow_up = false;
        Ok(())
    }

    /// Records the user reply to a pending question.
    pub fn note_follow_up_answered(&mut self) {
        self.awaiting_follow_up = false;
    }

    /// Records the URL of a generated image.
    pub fn record_image_url(&mut self, url: impl Into<String>) {
        self.generated_image_url = Some(url.into());
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
