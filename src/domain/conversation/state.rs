//! Dialogue state machine.
//!
//! Defines the per-round lifecycle of a conversation and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::errors::DomainError;

/// The dialogue state of a conversation round.
///
/// Rounds move from free dialogue toward a finalized prompt:
/// - `Idle`: no user input processed yet
/// - `AwaitingUserReply`: a clarifying question was just shown
/// - `TemplateSelected`: a library template was picked, not yet finalized
/// - `Finalized`: a final prompt exists and is ready for image generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// Initial state, awaiting the first user event.
    #[default]
    Idle,

    /// A clarifying question (and optional recommendation) is pending a reply.
    AwaitingUserReply,

    /// A library template was selected; the next message modifies it.
    TemplateSelected,

    /// A final prompt exists. Terminal for the round; image generation is
    /// accepted here without re-entering dialogue.
    Finalized,
}

impl DialogueState {
    /// Returns true if transition from self to target is valid.
    ///
    /// A template selection always short-circuits the question flow, so
    /// `TemplateSelected` is reachable from every non-finalized state (and
    /// from `Finalized`, starting a template round). A message arriving in
    /// `Finalized` supersedes the final prompt in place.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueState::*;
        matches!(
            (self, target),
            // First message asks a question, or an upload/budget edge finalizes directly
            (Idle, AwaitingUserReply) | (Idle, TemplateSelected) | (Idle, Finalized) |
            // Question loop, template short-circuit, or finalization
            (AwaitingUserReply, AwaitingUserReply) |
            (AwaitingUserReply, TemplateSelected) |
            (AwaitingUserReply, Finalized) |
            // Re-selection replaces the template; a message finalizes it
            (TemplateSelected, TemplateSelected) | (TemplateSelected, Finalized) |
            // Superseding finalization or a fresh template round
            (Finalized, Finalized) | (Finalized, TemplateSelected)
        )
    }

    /// Returns all valid target states from the current state.
    pub fn valid_transitions(&self) -> Vec<Self> {
        use DialogueState::*;
        match self {
            Idle => vec![AwaitingUserReply, TemplateSelected, Finalized],
            AwaitingUserReply => vec![AwaitingUserReply, TemplateSelected, Finalized],
            TemplateSelected => vec![TemplateSelected, Finalized],
            Finalized => vec![Finalized, TemplateSelected],
        }
    }

    /// Performs a transition with validation.
    pub fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }

    /// Returns true if a final prompt exists in this state.
    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized)
    }
}
