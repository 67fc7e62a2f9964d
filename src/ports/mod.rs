//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionClient` - chat-completion API with bounded retry
//! - `ImageGenerator` - external image-generation service (best effort)

mod completion_client;
mod image_generator;

pub use completion_client::{
    ChatMessage, ChatRole, CompletionClient, CompletionError, CompletionRequest,
    CompletionResponse, ContentPart, ImageUrl, MessageContent,
};
pub use image_generator::{ImageError, ImageGenerator};
