use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("provider rejected the credential: {0}")]
    Auth(String),

    #[error("provider rate limit hit: {0}")]
    RateLimited(String),

    #[error("invalid completion request: {0}")]
    InvalidRequest(String),

    #[error("network error reaching provider: {0}")]
    Network(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
