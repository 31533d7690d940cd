//! Carousel generation: orchestrates the full pipeline.
//!
//! Flow: validate input → gather corpus (source text + fetched URLs) →
//!       build prompt → LLM generate → extract JSON → parse result → repair limits.

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::extract::safe_extract_json;
use crate::fetch::reader::{fetch_sources, ContentFetcher};
use crate::generation::input::GenerationInput;
use crate::generation::prompt_builder::build_prompt;
use crate::generation::result::GenerationResult;
use crate::llm_client::{Credentials, LlmError, TextGenerator};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub result: GenerationResult,
    /// Repairs applied to the model output, one note each.
    pub adjustments: Vec<String>,
    pub sources_fetched: usize,
    pub sources_failed: usize,
}

/// Source text followed by whatever the URLs yielded.
pub struct Corpus {
    pub text: String,
    pub sources_fetched: usize,
    pub sources_failed: usize,
}

/// Builds the corpus for a validated input.
///
/// Fails only when there is nothing usable at all: no source text and no URL
/// that could be fetched.
pub async fn gather_corpus(
    fetcher: &dyn ContentFetcher,
    input: &GenerationInput,
) -> Result<Corpus, AppError> {
    let source_text = input.source_text.trim();
    let urls = input.urls();

    let fetched = fetch_sources(fetcher, &urls).await;

    if source_text.is_empty() && fetched.succeeded == 0 {
        return Err(AppError::Validation(
            "No se pudo obtener contenido de ninguna URL y no hay texto fuente".to_string(),
        ));
    }

    let text = [source_text, fetched.combined.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(Corpus {
        text,
        sources_fetched: fetched.succeeded,
        sources_failed: fetched.failed,
    })
}

/// Resolves request credentials against the configured fallbacks.
pub fn resolve_credentials(
    input: &GenerationInput,
    config: &Config,
) -> Result<Credentials, AppError> {
    Credentials::resolve(
        input.api_key.as_deref(),
        input.model.as_deref(),
        config.gemini_api_key.as_deref(),
        &config.gemini_model,
    )
    .map_err(|e| match e {
        LlmError::MissingApiKey => AppError::Validation(
            "Falta la clave de API de Gemini. Añádela en los ajustes.".to_string(),
        ),
        other => AppError::Llm(other),
    })
}

/// Runs the full generation pipeline.
pub async fn generate_carousel(
    llm: &dyn TextGenerator,
    fetcher: &dyn ContentFetcher,
    config: &Config,
    input: &GenerationInput,
) -> Result<GenerationOutcome, AppError> {
    input.validate()?;
    let credentials = resolve_credentials(input, config)?;

    let corpus = gather_corpus(fetcher, input).await?;
    info!(
        "Corpus ready: {} chars, {} sources fetched, {} failed",
        corpus.text.len(),
        corpus.sources_fetched,
        corpus.sources_failed
    );

    let prompt = build_prompt(input, &corpus.text);
    info!(
        "Generating {} slides with model {} ({} prompt chars)",
        input.slide_count,
        credentials.model,
        prompt.len()
    );

    let raw = llm.generate(&prompt, &credentials).await?;

    let payload = safe_extract_json(&raw);
    let mut result = GenerationResult::from_payload(payload)?;
    let adjustments = result.enforce_limits(input);

    info!(
        "Generated carousel: {} slides, {} post copies, {} hashtags",
        result.slides.len(),
        result.post_copies.len(),
        result.hashtags.len()
    );

    Ok(GenerationOutcome {
        result,
        adjustments,
        sources_fetched: corpus.sources_fetched,
        sources_failed: corpus.sources_failed,
    })
}
