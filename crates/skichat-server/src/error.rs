use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use skichat_openai::CompletionError;

pub(crate) const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "The service is temporarily unavailable. Please try again later.";
const AUTH_MESSAGE: &str = "Authentication error. Please check the API configuration.";
const RATE_LIMIT_MESSAGE: &str = "Service is busy. Please try again in a moment.";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    RateLimited(String),
    MethodNotAllowed,
    ServiceUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Provider failures never reach the client verbatim: the credential and
/// throttling cases keep their status, everything else collapses to 503.
impl From<CompletionError> for ApiError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Auth(detail) => {
                tracing::error!(detail, "provider rejected the API key");
                ApiError::Unauthorized(AUTH_MESSAGE.to_string())
            }
            CompletionError::RateLimited(detail) => {
                tracing::warn!(detail, "provider rate limit hit");
                ApiError::RateLimited(RATE_LIMIT_MESSAGE.to_string())
            }
            other => {
                tracing::error!(error = %other, "provider call failed");
                ApiError::ServiceUnavailable(SERVICE_UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }
}
