use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store request failed: {0}")]
    Request(String),

    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("response decoding failed: {0}")]
    Decode(String),

    #[error("insert returned no representation")]
    EmptyInsert,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
