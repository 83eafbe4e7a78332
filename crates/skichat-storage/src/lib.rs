//! skichat-storage
//!
//! Client for the managed backend service holding sessions, history, and
//! identity. Thin wrapper around its REST surface; the chat endpoint never
//! depends on this crate — persistence is the UI's concern and a failure
//! here must never block an answer that was already received.

pub mod auth;
pub mod client;
pub mod error;
pub mod history;
pub mod sessions;
