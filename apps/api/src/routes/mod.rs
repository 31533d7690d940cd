pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::fetch::handlers as fetch;
use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Source content
        .route("/api/fetch-url", post(fetch::handle_fetch_url))
        .route("/api/fetch-urls", post(fetch::handle_fetch_urls))
        // Generation
        .route("/api/generate", post(generation::handle_generate))
        .route("/api/prompt", post(generation::handle_prompt_preview))
        // Rendering
        .route("/api/render", post(render::handle_render))
        // Editor sessions
        .route("/api/editor/slides", post(editor::handle_create_slide))
        .route(
            "/api/editor/slides/:id",
            get(editor::handle_get_slide)
                .put(editor::handle_put_slide)
                .delete(editor::handle_delete_slide),
        )
        .with_state(state)
}
