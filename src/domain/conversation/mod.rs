//! Conversation domain: turns, transcript, session state, and the
//! dialogue state machine.

mod errors;
mod message;
mod session;
mod state;

pub use errors::DomainError;
pub use message::{Role, Transcript, Turn, TurnId};
pub use session::{Recommendation, SessionId, SessionState, QUESTION_BUDGET};
pub use state::DialogueState;
