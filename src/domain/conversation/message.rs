//! Turn entity and transcript for conversations.
//!
//! Turns are immutable records of user/assistant exchanges. The transcript
//! is append-only: insertion order is the conversation order and is
//! preserved verbatim for prompt assembly.

use crate::domain::conversation::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a turn within a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(Uuid);

impl TurnId {
    /// Creates a new random TurnId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a turn's author.
///
/// Mirrors the completion API message roles for consistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System instructions (invisible to the user).
    System,
    /// User input.
    User,
    /// Assistant response.
    Assistant,
}

impl Role {
    /// Returns the role label used when serializing a transcript into a
    /// finalization prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

/// An immutable conversation turn.
///
/// # Invariants
///
/// - `content` is non-empty (validated at construction)
/// - never mutated after creation, only appended to a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    id: TurnId,
    role: Role,
    content: String,
    created_at: DateTime<Utc>,
}

impl Turn {
    /// Creates a new turn with the given role and content.
    ///
    /// # Errors
    ///
    /// - `Validation` if content is empty or whitespace-only
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation(
                "content",
                "turn content cannot be empty",
            ));
        }

        Ok(Self {
            id: TurnId::new(),
            role,
            content,
            created_at: Utc::now(),
        })
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::Assistant, content)
    }

    /// Returns the turn id.
    pub fn id(&self) -> &TurnId {
        &self.id
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the turn was created.
    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    /// Returns true if this turn is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true if this turn is from the assistant.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Append-only ordered record of conversation turns.
///
/// The single source of truth passed to every completion call. No
/// reordering, no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn. The only mutation a transcript supports.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Returns the turns in conversation order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns the most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Serializes the transcript as role-labelled lines, one per turn,
    /// in conversation order.
    pub fn to_labelled_text(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.role().label(), t.content()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
