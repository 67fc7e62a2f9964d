//! Domain layer: pure conversation model, prompt library, and prompt
//! assembly. No I/O and no async in this layer.

pub mod conversation;
pub mod library;
pub mod prompt;
