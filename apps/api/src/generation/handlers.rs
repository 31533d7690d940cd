//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{gather_corpus, generate_carousel, GenerationOutcome};
use crate::generation::input::GenerationInput;
use crate::generation::prompt_builder::build_prompt;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPreviewResponse {
    pub prompt: String,
    pub corpus_chars: usize,
}

/// POST /api/generate
///
/// Full pipeline: corpus → prompt → LLM → JSON extraction → carousel.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(input): Json<GenerationInput>,
) -> Result<Json<GenerationOutcome>, AppError> {
    let outcome =
        generate_carousel(state.llm.as_ref(), state.fetcher.as_ref(), &state.config, &input)
            .await?;
    Ok(Json(outcome))
}

/// POST /api/prompt
///
/// Returns the prompt that /api/generate would send, without calling the LLM.
pub async fn handle_prompt_preview(
    State(state): State<AppState>,
    Json(input): Json<GenerationInput>,
) -> Result<Json<PromptPreviewResponse>, AppError> {
    input.validate()?;
    let corpus = gather_corpus(state.fetcher.as_ref(), &input).await?;
    Ok(Json(PromptPreviewResponse {
        prompt: build_prompt(&input, &corpus.text),
        corpus_chars: corpus.text.chars().count(),
    }))
}
