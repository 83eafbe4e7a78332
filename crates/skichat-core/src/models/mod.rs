pub mod history;
pub mod message;
pub mod session;

pub use history::{ChatHistoryEntry, transcript};
pub use message::{ChatMessage, MessageRole};
pub use session::ChatSession;
