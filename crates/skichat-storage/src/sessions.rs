//! `chat_sessions` operations.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use skichat_core::models::ChatSession;

use crate::client::{StoreClient, check};
use crate::error::StorageError;

/// Insert payload for a new session. The store fills `id`, `created_at`,
/// and `last_activity`.
#[derive(Debug, Serialize)]
pub struct NewSession {
    pub user_id: Uuid,
    pub is_active: bool,
}

/// List the caller's sessions, most recently active first.
pub async fn list_sessions(client: &StoreClient) -> Result<Vec<ChatSession>, StorageError> {
    let url = format!(
        "{}?select=*&order=last_activity.desc",
        client.table_url("chat_sessions")
    );

    let response = check(client.get(&url)).await?;
    let sessions: Vec<ChatSession> = response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))?;

    Ok(sessions)
}

/// Create a new active session for `user_id` and return the stored row.
pub async fn create_session(
    client: &StoreClient,
    user_id: Uuid,
) -> Result<ChatSession, StorageError> {
    let url = client.table_url("chat_sessions");
    let payload = NewSession {
        user_id,
        is_active: true,
    };

    let response = check(
        client
            .post(&url)
            .header("Prefer", "return=representation")
            .json(&payload),
    )
    .await?;

    let mut rows: Vec<ChatSession> = response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))?;

    let session = rows.pop().ok_or(StorageError::EmptyInsert)?;
    info!(session_id = %session.id, "created chat session");
    Ok(session)
}

/// Bump a session's `last_activity` to now. Called after each exchange.
pub async fn touch_session(client: &StoreClient, session_id: Uuid) -> Result<(), StorageError> {
    let url = format!(
        "{}?id=eq.{session_id}",
        client.table_url("chat_sessions")
    );

    let payload = serde_json::json!({ "last_activity": jiff::Timestamp::now() });
    check(client.patch(&url).json(&payload)).await?;

    Ok(())
}
