//! `chat_history` operations. Append-only; rows read back oldest-first.

use serde::Serialize;
use uuid::Uuid;

use skichat_core::models::ChatHistoryEntry;

use crate::client::{StoreClient, check};
use crate::error::StorageError;

/// Insert payload for one completed exchange. The store fills `id` and
/// `created_at`.
#[derive(Debug, Serialize)]
pub struct NewHistoryEntry {
    pub session_id: Uuid,
    pub message: String,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_questions: Option<Vec<String>>,
}

/// Append one exchange to a session's history.
pub async fn append_history(
    client: &StoreClient,
    entry: &NewHistoryEntry,
) -> Result<(), StorageError> {
    let url = client.table_url("chat_history");
    check(client.post(&url).json(entry)).await?;
    Ok(())
}

/// Load a session's history ordered by creation time ascending, the sole
/// ordering guarantee. Feed the result to
/// `skichat_core::models::transcript` to rebuild the conversation.
pub async fn list_history(
    client: &StoreClient,
    session_id: Uuid,
) -> Result<Vec<ChatHistoryEntry>, StorageError> {
    let url = format!(
        "{}?select=*&session_id=eq.{session_id}&order=created_at.asc",
        client.table_url("chat_history")
    );

    let response = check(client.get(&url)).await?;
    let entries: Vec<ChatHistoryEntry> = response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))?;

    Ok(entries)
}
