//! Adapters - Implementations of the ports against real (and mock)
//! external services.

pub mod ai;
pub mod image;
