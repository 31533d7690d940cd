use std::sync::Arc;

use crate::config::Config;
use crate::editor::SlideStore;
use crate::fetch::ContentFetcher;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
    /// URL content backend. Default: ReaderClient.
    pub fetcher: Arc<dyn ContentFetcher>,
    /// Editor sessions, keyed by slide id.
    pub slides: SlideStore,
    pub config: Config,
}
