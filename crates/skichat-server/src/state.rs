use std::sync::Arc;

use skichat_openai::CompletionBackend;

/// Shared application state, injected into route handlers via Axum state.
///
/// The gateway is held behind the trait so tests can substitute a scripted
/// backend.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn CompletionBackend>,
}
