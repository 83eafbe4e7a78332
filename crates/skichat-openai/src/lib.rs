//! skichat-openai
//!
//! Chat-completion gateway for an OpenAI-compatible provider, plus the
//! follow-up question generator built on top of it.

pub mod client;
pub mod error;
pub mod followups;

pub use client::{CompletionBackend, CompletionRequest, OpenAiGateway};
pub use error::CompletionError;
