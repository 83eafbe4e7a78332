//! In-process endpoint tests: the router is driven with `oneshot` and the
//! completion backend is a scripted stub, so no network is involved.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use skichat_openai::{CompletionBackend, CompletionError, CompletionRequest};
use skichat_server::app;
use skichat_server::state::AppState;

#[derive(Clone, Copy)]
enum StubFailure {
    Auth,
    RateLimited,
    Unreachable,
}

/// Scripted backend. The answer call and the follow-up call are told apart
/// by their token budgets (500 vs 100).
#[derive(Clone)]
struct StubBackend {
    key_valid: bool,
    failure: Option<StubFailure>,
    answer: String,
    followups: String,
}

impl StubBackend {
    fn healthy(answer: &str, followups: &str) -> Self {
        Self {
            key_valid: true,
            failure: None,
            answer: answer.to_string(),
            followups: followups.to_string(),
        }
    }

    fn failing(failure: StubFailure) -> Self {
        Self {
            key_valid: true,
            failure: Some(failure),
            answer: String::new(),
            followups: String::new(),
        }
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        match self.failure {
            Some(StubFailure::Auth) => Err(CompletionError::Auth("unauthorized".to_string())),
            Some(StubFailure::RateLimited) => {
                Err(CompletionError::RateLimited("slow down".to_string()))
            }
            Some(StubFailure::Unreachable) => {
                Err(CompletionError::Network("connection refused".to_string()))
            }
            None => {
                if request.max_tokens == 500 {
                    Ok(self.answer.clone())
                } else {
                    Ok(self.followups.clone())
                }
            }
        }
    }

    async fn validate_key(&self) -> Result<(), CompletionError> {
        if self.key_valid {
            Ok(())
        } else {
            Err(CompletionError::Auth("no API key configured".to_string()))
        }
    }
}

fn test_app(stub: StubBackend) -> Router {
    app(AppState {
        gateway: Arc::new(stub),
    })
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn options_returns_204_with_cors_headers_and_no_body() {
    let response = test_app(StubBackend::healthy("", ""))
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "*");
    assert_eq!(headers["access-control-max-age"], "86400");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn get_returns_405_method_not_allowed() {
    let response = test_app(StubBackend::healthy("", ""))
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["error"], "Method not allowed");
}

#[tokio::test]
async fn malformed_json_returns_400_invalid_format() {
    let response = test_app(StubBackend::healthy("", ""))
        .oneshot(post_chat("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid request format");
}

#[tokio::test]
async fn empty_message_returns_400_ski_prompt() {
    let response = test_app(StubBackend::healthy("", ""))
        .oneshot(post_chat(r#"{"message":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Please provide a question about skiing."
    );
}

#[tokio::test]
async fn missing_message_field_returns_400_ski_prompt() {
    let response = test_app(StubBackend::healthy("", ""))
        .oneshot(post_chat("{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Please provide a question about skiing."
    );
}

#[tokio::test]
async fn failed_key_probe_returns_503() {
    let stub = StubBackend {
        key_valid: false,
        failure: None,
        answer: String::new(),
        followups: String::new(),
    };
    let response = test_app(stub)
        .oneshot(post_chat(r#"{"message":"How is Zermatt?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await["error"],
        "The service is temporarily unavailable. Please try again later."
    );
}

#[tokio::test]
async fn provider_auth_failure_returns_401() {
    let response = test_app(StubBackend::failing(StubFailure::Auth))
        .oneshot(post_chat(r#"{"message":"How is Zermatt?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Authentication error. Please check the API configuration."
    );
}

#[tokio::test]
async fn provider_rate_limit_returns_429() {
    let response = test_app(StubBackend::failing(StubFailure::RateLimited))
        .oneshot(post_chat(r#"{"message":"How is Zermatt?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body_json(response).await["error"],
        "Service is busy. Please try again in a moment."
    );
}

#[tokio::test]
async fn unreachable_provider_returns_503() {
    let response = test_app(StubBackend::failing(StubFailure::Unreachable))
        .oneshot(post_chat(r#"{"message":"How is Zermatt?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn successful_exchange_formats_answer_and_caps_followups() {
    let stub = StubBackend::healthy(
        "Quick Summary:\nGood conditions\n\nKey Conditions:\nSnow: 30cm",
        "What is the avalanche risk?\nAre all lifts open?\nWhat gear do I need?\nIs there night skiing?",
    );
    let response = test_app(stub)
        .oneshot(post_chat(r#"{"message":"How is Zermatt today?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

    let body = body_json(response).await;
    assert_eq!(
        body["response"],
        "🚨 Quick Summary:\n• Good conditions\n\n🔍 Key Conditions:\nSnow: 30cm"
    );
    let questions = body["suggestedQuestions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0], "What is the avalanche risk?");
    assert_eq!(questions[2], "What gear do I need?");
}

#[tokio::test]
async fn sparse_followup_output_is_never_padded() {
    let stub = StubBackend::healthy("Safety Status:\nPatrol active", "\nOnly one?\n  \n");
    let response = test_app(stub)
        .oneshot(post_chat(r#"{"message":"How is Aspen?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let questions = body["suggestedQuestions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0], "Only one?");
}

#[tokio::test]
async fn health_check_is_open() {
    let response = test_app(StubBackend::healthy("", ""))
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
