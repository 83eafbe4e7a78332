use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use skichat_core::format::format_response;
use skichat_openai::CompletionRequest;
use skichat_openai::followups::suggest_follow_ups;

use crate::error::{ApiError, SERVICE_UNAVAILABLE_MESSAGE};
use crate::prompt::SKI_SYSTEM_PROMPT;
use crate::state::AppState;

const INVALID_FORMAT_MESSAGE: &str = "Invalid request format";
const EMPTY_MESSAGE_PROMPT: &str = "Please provide a question about skiing.";

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(rename = "suggestedQuestions")]
    pub suggested_questions: Vec<String>,
}

/// Handle one chat exchange.
///
/// Two sequential provider calls: the answer first, then follow-up
/// questions conditioned on the formatted answer. Both run through the same
/// failure mapping; the key probe runs before either and any probe failure
/// is reported as service-unavailable regardless of its cause.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected malformed chat request body");
        ApiError::BadRequest(INVALID_FORMAT_MESSAGE.to_string())
    })?;

    if request.message.is_empty() {
        return Err(ApiError::BadRequest(EMPTY_MESSAGE_PROMPT.to_string()));
    }

    if let Err(e) = state.gateway.validate_key().await {
        tracing::error!(error = %e, "completion credential validation failed");
        return Err(ApiError::ServiceUnavailable(
            SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        ));
    }

    let raw = state
        .gateway
        .complete(&CompletionRequest {
            system_prompt: SKI_SYSTEM_PROMPT.to_string(),
            user_content: request.message.clone(),
            temperature: 0.3,
            max_tokens: 500,
        })
        .await?;

    let response = format_response(&raw);

    let suggested_questions =
        suggest_follow_ups(state.gateway.as_ref(), &request.message, &response).await?;

    Ok((
        [(header::CACHE_CONTROL, "no-cache")],
        Json(ChatResponse {
            response,
            suggested_questions,
        }),
    )
        .into_response())
}

/// Preflight response: no body, permissive cross-origin headers.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
            (header::ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
    )
}

/// Fallback for every method other than POST and OPTIONS.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
