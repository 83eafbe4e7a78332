use serde::{Deserialize, Serialize};

/// One rendered message in a transcript.
///
/// Immutable once created; assistant messages may carry the follow-up
/// questions suggested alongside the answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub role: MessageRole,
    #[serde(rename = "suggestedQuestions", skip_serializing_if = "Option::is_none")]
    pub suggested_questions: Option<Vec<String>>,
}

/// Role of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}
