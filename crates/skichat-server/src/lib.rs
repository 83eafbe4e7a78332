//! skichat-server
//!
//! The chat endpoint: validates requests, runs the two-stage completion
//! pipeline (answer, then follow-ups conditioned on it), and maps provider
//! failures to the HTTP error taxonomy.

use std::time::Duration;

use axum::Router;
use axum::http::Method;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod prompt;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the service router. Split out of `main` so endpoint tests can
/// drive it in-process with a stubbed completion backend.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/chat",
            post(routes::chat::chat)
                .options(routes::chat::preflight)
                .fallback(routes::chat::method_not_allowed),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
