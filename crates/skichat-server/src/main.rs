use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use skichat_openai::OpenAiGateway;
use skichat_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for the hosting runtime's log collector
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; chat requests will be answered with 503");
    }
    let api_base =
        env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
    let model = env::var("SKICHAT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
    let addr = env::var("SKICHAT_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());

    let state = AppState {
        gateway: Arc::new(OpenAiGateway::new(api_key, api_base, model)),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "skichat-server listening");
    axum::serve(listener, skichat_server::app(state)).await?;

    Ok(())
}
