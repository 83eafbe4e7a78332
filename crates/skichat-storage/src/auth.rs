//! Identity operations consumed from the backend's auth endpoints: sign in,
//! sign up, current user, sign out. The provider's internals are not our
//! concern; this is only the client side of its contract.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::client::{StoreClient, check};
use crate::error::StorageError;

/// An authenticated identity as returned by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens and user returned by sign-in/sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Sign in with email and password.
pub async fn sign_in(
    client: &StoreClient,
    email: &str,
    password: &str,
) -> Result<AuthSession, StorageError> {
    let url = format!("{}?grant_type=password", client.auth_url("token"));

    let response = check(client.post(&url).json(&Credentials { email, password }))
        .await
        .map_err(auth_error)?;

    let session: AuthSession = response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))?;

    info!(user_id = %session.user.id, "signed in");
    Ok(session)
}

/// Register a new identity with a display name attribute.
pub async fn sign_up(
    client: &StoreClient,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<AuthSession, StorageError> {
    let url = client.auth_url("signup");
    let payload = json!({
        "email": email,
        "password": password,
        "data": { "name": display_name },
    });

    let response = check(client.post(&url).json(&payload))
        .await
        .map_err(auth_error)?;

    let session: AuthSession = response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))?;

    info!(user_id = %session.user.id, "signed up");
    Ok(session)
}

/// Fetch the identity behind the client's current access token.
pub async fn current_user(client: &StoreClient) -> Result<AuthUser, StorageError> {
    let url = client.auth_url("user");

    let response = check(client.get(&url)).await.map_err(auth_error)?;
    response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))
}

/// Invalidate the client's current access token.
pub async fn sign_out(client: &StoreClient) -> Result<(), StorageError> {
    let url = client.auth_url("logout");
    check(client.post(&url)).await.map_err(auth_error)?;
    Ok(())
}

fn auth_error(err: StorageError) -> StorageError {
    match err {
        StorageError::Api { status, message } if status == 400 || status == 401 => {
            StorageError::Auth(message)
        }
        other => other,
    }
}
