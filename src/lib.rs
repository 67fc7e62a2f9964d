//! Prompt Loom - Conversational Image-Prompt Refinement
//!
//! This crate turns an open-ended user request into a refined, structured
//! prompt for an image-generation service through a bounded clarifying
//! dialogue against a chat-completion API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
