use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::{ChatMessage, MessageRole};

/// One persisted question/answer exchange, scoped to a session.
///
/// Append-only; rows are read back ordered by `created_at` ascending, which
/// is the sole ordering guarantee. Field names match the store's
/// `chat_history` rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub id: Uuid,
    pub session_id: Uuid,
    pub message: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_questions: Option<Vec<String>>,
    pub created_at: jiff::Timestamp,
}

/// Rebuild a transcript from history entries.
///
/// Each entry expands to a user/assistant pair; entry order is preserved, so
/// oldest-first input yields an oldest-first transcript. The assistant half
/// carries the follow-up questions stored with the exchange.
pub fn transcript(entries: &[ChatHistoryEntry]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        messages.push(ChatMessage {
            content: entry.message.clone(),
            role: MessageRole::User,
            suggested_questions: None,
        });
        messages.push(ChatMessage {
            content: entry.response.clone(),
            role: MessageRole::Assistant,
            suggested_questions: entry.suggested_questions.clone(),
        });
    }
    messages
}
