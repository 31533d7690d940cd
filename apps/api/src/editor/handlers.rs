//! Axum route handlers for the Editor API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::editor::layout::nodes_from_slide;
use crate::editor::model::EditorSlide;
use crate::errors::AppError;
use crate::generation::input::Theme;
use crate::generation::result::Slide;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideRequest {
    pub slide: Slide,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub template_image: Option<String>,
    /// Accent colour for the layout; defaults to the configured brand colour.
    #[serde(default)]
    pub accent: Option<String>,
}

/// POST /api/editor/slides
///
/// Lays out a generated slide as canvas nodes and opens an editing session for it.
pub async fn handle_create_slide(
    State(state): State<AppState>,
    Json(request): Json<CreateSlideRequest>,
) -> Result<(StatusCode, Json<EditorSlide>), AppError> {
    let id = Uuid::new_v4().to_string();
    let accent = request
        .accent
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| state.config.brand_color.clone());

    let slide = EditorSlide {
        nodes: nodes_from_slide(&id, &request.slide, request.theme, &accent),
        id,
        template_image: request.template_image,
        theme: request.theme,
        updated_at: chrono::Utc::now(),
    };

    let stored = state.slides.put(slide).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/editor/slides/:id
pub async fn handle_get_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditorSlide>, AppError> {
    state
        .slides
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Slide {id} not found")))
}

/// PUT /api/editor/slides/:id
///
/// Replaces the slide. The path id wins over any id in the body; nodes are
/// sanitized before storing.
pub async fn handle_put_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut slide): Json<EditorSlide>,
) -> Result<Json<EditorSlide>, AppError> {
    slide.id = id;
    Ok(Json(state.slides.put(slide).await))
}

/// DELETE /api/editor/slides/:id
pub async fn handle_delete_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .slides
        .remove(&id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| AppError::NotFound(format!("Slide {id} not found")))
}
