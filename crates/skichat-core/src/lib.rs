//! skichat-core
//!
//! Pure domain types and the answer formatter.
//! No network dependency — this is the shared vocabulary of the skichat system.

pub mod format;
pub mod models;
