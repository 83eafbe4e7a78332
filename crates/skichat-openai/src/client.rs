//! Completion gateway: one outbound call per invocation, no retries.
//!
//! Failures are surfaced as typed [`CompletionError`] values classified from
//! the provider's HTTP status (401 credential, 429 throttling, anything else
//! unclassified), so the serving layer can map them uniformly across both
//! pipeline stages.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::CompletionError;

/// Sampling parameters and prompt content for a single completion call.
/// Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_content: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Seam over the completion provider. The server holds a
/// `Arc<dyn CompletionBackend>` so endpoint tests can script responses
/// without a network.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one completion call and return the first candidate's text
    /// content (empty string if the provider returns none).
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Verify the configured credential with a minimal 1-token probe.
    /// A missing key fails without touching the network.
    async fn validate_key(&self) -> Result<(), CompletionError>;
}

/// Gateway to an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiGateway {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
        }
    }

    async fn post_completion(
        &self,
        body: serde_json::Value,
    ) -> Result<ChatCompletion, CompletionError> {
        let url = format!("{}/chat/completions", self.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => CompletionError::Auth(detail),
                429 => CompletionError::RateLimited(detail),
                _ => CompletionError::Provider(format!("{status}: {detail}")),
            });
        }

        response
            .json::<ChatCompletion>()
            .await
            .map_err(|e| CompletionError::ResponseParse(e.to_string()))
    }
}

#[async_trait]
impl CompletionBackend for OpenAiGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        if request.user_content.trim().is_empty() {
            return Err(CompletionError::InvalidRequest(
                "user content is empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&request.temperature) {
            return Err(CompletionError::InvalidRequest(format!(
                "temperature {} outside [0, 1]",
                request.temperature
            )));
        }
        if request.max_tokens == 0 {
            return Err(CompletionError::InvalidRequest(
                "max_tokens must be positive".to_string(),
            ));
        }

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_content },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        debug!(model = %self.model, max_tokens = request.max_tokens, "requesting completion");

        let completion = self.post_completion(body).await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        info!(model = %self.model, content_len = content.len(), "completion received");

        Ok(content)
    }

    async fn validate_key(&self) -> Result<(), CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::Auth("no API key configured".to_string()));
        }

        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": "test" }],
            "max_tokens": 1,
        });

        self.post_completion(body).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
