//! Error types for the conversation domain.

use thiserror::Error;

/// Errors raised by domain entities and state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A field failed validation at construction.
    #[error("field '{field}' is invalid: {reason}")]
    Validation {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A dialogue state transition that the state machine forbids.
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Requested state.
        to: String,
    },

    /// The question budget is already spent.
    #[error("question budget of {budget} exhausted")]
    QuestionBudgetExhausted {
        /// The fixed budget.
        budget: u8,
    },
}

impl DomainError {
    /// Creates a validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-transition error.
    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from: from.into(),
            to: to.into(),
        }
    }
}
