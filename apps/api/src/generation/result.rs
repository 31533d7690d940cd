//! Generation result: the carousel parsed out of the model's JSON.
//!
//! Parsing is lenient about field naming and missing optional sections, but a
//! result without slides is a failed generation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::generation::input::GenerationInput;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, alias = "points", deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    /// Visual direction for the designer or image generator.
    #[serde(
        default,
        alias = "visualDirection",
        alias = "visual_direction",
        deserialize_with = "null_as_default"
    )]
    pub visual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostCopy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub audience: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub slides: Vec<Slide>,
    #[serde(
        default,
        alias = "post_copies",
        alias = "posts",
        deserialize_with = "null_as_default"
    )]
    pub post_copies: Vec<PostCopy>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: Vec<String>,
    #[serde(
        default,
        alias = "scheduleSuggestions",
        alias = "schedule_suggestions",
        deserialize_with = "null_as_default"
    )]
    pub schedule: Vec<String>,
}

/// Models emit `null` for sections they had nothing for; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerationResult {
    /// Converts the extracted JSON object into a result.
    /// Fails when `slides` is missing, empty, or not shaped like slides.
    pub fn from_payload(payload: Value) -> Result<Self, AppError> {
        let has_slides = payload
            .get("slides")
            .and_then(Value::as_array)
            .is_some_and(|s| !s.is_empty());
        if !has_slides {
            return Err(AppError::UnprocessableEntity(
                "La respuesta de la IA no contiene diapositivas. Inténtalo de nuevo.".to_string(),
            ));
        }

        serde_json::from_value(payload).map_err(|e| {
            AppError::UnprocessableEntity(format!(
                "La respuesta de la IA no tiene el formato esperado: {e}"
            ))
        })
    }

    /// Repairs the result against the limits the prompt asked for and returns a
    /// note for every adjustment made.
    ///
    /// Extra slides and bullets are dropped. Missing slides cannot be invented and
    /// over-long bullets are not cut mid-sentence; both are only reported.
    pub fn enforce_limits(&mut self, input: &GenerationInput) -> Vec<String> {
        let mut adjustments = Vec::new();
        let requested = input.slide_count as usize;
        let max_bullets = input.copy_length.max_bullets();
        let max_words = input.copy_length.max_words();

        if self.slides.len() > requested {
            adjustments.push(format!(
                "Dropped {} slides beyond the requested {requested}",
                self.slides.len() - requested
            ));
            self.slides.truncate(requested);
        } else if self.slides.len() < requested {
            adjustments.push(format!(
                "Model returned {} slides, {requested} were requested",
                self.slides.len()
            ));
        }

        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.title = slide.title.trim().to_string();
            let before = slide.bullets.len();
            slide.bullets = slide
                .bullets
                .iter()
                .map(|b| b.trim())
                .filter(|b| !b.is_empty())
                .map(str::to_string)
                .collect();
            let blanks = before - slide.bullets.len();
            if blanks > 0 {
                adjustments.push(format!("Slide {}: removed {blanks} empty bullets", index + 1));
            }
            if slide.bullets.len() > max_bullets {
                adjustments.push(format!(
                    "Slide {}: kept {max_bullets} of {} bullets",
                    index + 1,
                    slide.bullets.len()
                ));
                slide.bullets.truncate(max_bullets);
            }
            let wordy = slide
                .bullets
                .iter()
                .filter(|b| b.split_whitespace().count() > max_words)
                .count();
            if wordy > 0 {
                adjustments.push(format!(
                    "Slide {}: {wordy} bullets exceed {max_words} words",
                    index + 1
                ));
            }
        }

        let hashtags = normalize_hashtags(&self.hashtags);
        if hashtags != self.hashtags {
            adjustments.push("Normalized hashtags".to_string());
            self.hashtags = hashtags;
        }

        for note in &adjustments {
            warn!("Generation output adjusted: {note}");
        }
        adjustments
    }
}

/// Ensures a single leading `#`, strips inner whitespace, and drops duplicates
/// (case-insensitive, first occurrence wins).
fn normalize_hashtags(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in raw {
        let body: String = tag
            .trim()
            .trim_start_matches('#')
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if body.is_empty() {
            continue;
        }
        let tag = format!("#{body}");
        if !out.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            out.push(tag);
        }
    }
    out
}
