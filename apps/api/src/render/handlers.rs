//! Axum route handlers for the Render API.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::result::Slide;
use crate::render::html::{render_carousel, RenderOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub options: RenderOptions,
}

/// POST /api/render
///
/// Returns the carousel as an HTML document. Brand fields left blank fall back
/// to the configured brand.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(mut request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    if request.slides.is_empty() {
        return Err(AppError::Validation("slides cannot be empty".to_string()));
    }

    let brand = &mut request.options.brand;
    if brand.name.trim().is_empty() {
        brand.name = state.config.brand_name.clone();
    }
    if brand.color.trim().is_empty() {
        brand.color = state.config.brand_color.clone();
    }

    Ok(Html(render_carousel(&request.slides, &request.options)))
}
