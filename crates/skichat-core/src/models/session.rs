use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted conversation thread owned by one authenticated identity.
///
/// Created on demand when a user has no sessions or explicitly starts a new
/// one; `last_activity` is bumped after every exchange. Field names match
/// the store's `chat_sessions` rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: jiff::Timestamp,
    pub last_activity: jiff::Timestamp,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
