mod config;
mod editor;
mod errors;
mod extract;
mod fetch;
mod generation;
mod llm_client;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::editor::SlideStore;
use crate::fetch::ReaderClient;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Carousel API v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(
        config.gemini_base_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!("LLM client initialized (default model: {})", config.gemini_model);
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; requests must carry their own apiKey");
    }

    let fetcher = ReaderClient::new(
        config.reader_base_url.clone(),
        config.reader_api_key.clone(),
        config.fetch_timeout_secs,
    )?;
    info!("Reader client initialized ({})", config.reader_base_url);

    let state = AppState {
        llm: Arc::new(llm),
        fetcher: Arc::new(fetcher),
        slides: SlideStore::with_capacity(config.max_editor_sessions),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
