use std::sync::Arc;

use crate::llm_client::TextModel;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both collaborators sit behind traits so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub model: Arc<dyn TextModel>,
}
