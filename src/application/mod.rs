//! Application layer - Orchestration of domain operations over the ports.
//!
//! Consumes presentation events, drives the dialogue state machine, and
//! emits session events for the front-end to render.

pub mod events;
pub mod orchestrator;

pub use events::{SessionEvent, UserEvent};
pub use orchestrator::Orchestrator;
