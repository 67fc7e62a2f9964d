//! Completion Client Port - Interface for chat-completion API integrations.
//!
//! This port abstracts the hosted LLM completion service, so the orchestrator
//! and prompt assembler never couple to a specific vendor or wire format.
//!
//! # Design
//!
//! - Provider-agnostic message format, including multimodal content parts
//! - Error taxonomy with an explicit retryable/non-retryable split
//! - Implementations own the retry/backoff policy; callers see either a
//!   successful response or a single terminal error
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct MockClient;
//!
//! #[async_trait]
//! impl CompletionClient for MockClient {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError> {
//!         Ok(CompletionResponse::new("A red castle at dusk."))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for chat-completion interactions.
///
/// Implementations connect to an external completion endpoint and are
/// responsible for retrying transient failures within a bounded budget.
/// They must be invocable from many sessions concurrently: no shared
/// mutable state beyond immutable configuration.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a single completion for a fully formed request.
    ///
    /// The request is trusted to be well-formed (non-empty message list,
    /// leading system message); producing such requests is the prompt
    /// assembler's job.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// Request for a chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Ordered conversation messages; the first is always a system message.
    pub messages: Vec<ChatMessage>,
    /// Temperature for response randomness (must be positive).
    pub temperature: f32,
    /// Maximum tokens to generate (must be positive).
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request seeded with a system message.
    pub fn new(system_text: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            messages: vec![ChatMessage::system(system_text)],
            temperature,
            max_tokens,
        }
    }

    /// Appends a message to the conversation.
    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Returns true if the message list is well-formed: non-empty and
    /// starting with a system message.
    pub fn is_well_formed(&self) -> bool {
        self.messages
            .first()
            .is_some_and(|m| m.role == ChatRole::System)
            && self.temperature > 0.0
            && self.max_tokens > 0
    }
}

/// A single message in a completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent this message.
    pub role: ChatRole,
    /// Message content (plain text or multimodal parts).
    pub content: MessageContent,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates a multimodal user message from content parts.
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: ChatRole::User,
            content: MessageContent::Parts(parts),
        }
    }
}

/// Role of a completion message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instructions (guides model behavior).
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Message content: plain text or an ordered list of multimodal parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content.
    Text(String),
    /// Multimodal content parts (text + image), in order.
    Parts(Vec<ContentPart>),
}

/// One part of a multimodal message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// A text fragment.
    Text {
        /// The fragment content.
        text: String,
    },
    /// An image referenced by URL (typically a base64 data URL).
    ImageUrl {
        /// The image reference.
        image_url: ImageUrl,
    },
}

/// Image reference within a multimodal content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// The URL, usually `data:image/png;base64,...`.
    pub url: String,
}

/// Response from a chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated content, returned unchanged from the service.
    pub content: String,
}

impl CompletionResponse {
    /// Creates a response with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Completion client errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Transport-level failure (connection refused, DNS, broken pipe).
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The service answered with a non-2xx status.
    #[error("http status {status}: {body}")]
    HttpStatus {
        /// Status code returned by the service.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Response arrived but its shape was not the expected one.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request itself was invalid (caller bug); never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Retry budget exhausted; wraps the last underlying cause.
    #[error("max attempts exceeded after {attempts} attempts")]
    MaxAttemptsExceeded {
        /// Number of attempts made.
        attempts: u32,
        /// The failure observed on the final attempt.
        #[source]
        source: Box<CompletionError>,
    },
}

impl CompletionError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates an http-status error.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Creates a max-attempts-exceeded error wrapping the last cause.
    pub fn max_attempts(attempts: u32, last: CompletionError) -> Self {
        Self::MaxAttemptsExceeded {
            attempts,
            source: Box::new(last),
        }
    }

    /// Returns true if this error is transient and worth retrying.
    ///
    /// Any non-2xx status counts as transient; the remote service is
    /// authoritative and may recover. Only caller bugs and unparseable
    /// responses skip the retry budget.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CompletionError::Network(_)
                | CompletionError::Timeout { .. }
                | CompletionError::HttpStatus { .. }
        )
    }
}
