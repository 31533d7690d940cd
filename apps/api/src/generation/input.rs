//! Generation input: the user's carousel configuration, as submitted by the form.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::fetch::reader::{is_valid_url, MAX_SOURCE_URLS};

pub const MIN_SLIDES: u8 = 5;
pub const MAX_SLIDES: u8 = 10;
const DEFAULT_SLIDES: u8 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

/// Narrative structure of the carousel. Unknown ids fall back to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeTemplate {
    ProblemSolution,
    HowTo,
    CaseStudy,
    Generic,
}

impl NarrativeTemplate {
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().replace('_', "-").as_str() {
            "problem-solution" => NarrativeTemplate::ProblemSolution,
            "how-to" | "step-by-step" => NarrativeTemplate::HowTo,
            "case-study" => NarrativeTemplate::CaseStudy,
            _ => NarrativeTemplate::Generic,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    Developers,
    TechLeads,
    Executives,
    Recruiters,
    Founders,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalDepth {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Inspirational,
    Provocative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl CopyLength {
    /// Maximum bullets per slide.
    pub fn max_bullets(self) -> usize {
        match self {
            CopyLength::Short => 3,
            CopyLength::Medium => 4,
            CopyLength::Long => 5,
        }
    }

    /// Maximum words per bullet.
    pub fn max_words(self) -> usize {
        match self {
            CopyLength::Short => 12,
            CopyLength::Medium => 18,
            CopyLength::Long => 25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    #[default]
    Educate,
    Engage,
    Leads,
    Authority,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Everything needed for one generation call. Consumed once; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInput {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub source_urls: Vec<String>,
    /// Narrative template id, see `NarrativeTemplate::from_id`.
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default = "default_slide_count")]
    pub slide_count: u8,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub technical_depth: TechnicalDepth,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub copy_length: CopyLength,
    #[serde(default)]
    pub objective: Objective,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

fn default_slide_count() -> u8 {
    DEFAULT_SLIDES
}

impl GenerationInput {
    pub fn narrative_template(&self) -> NarrativeTemplate {
        NarrativeTemplate::from_id(&self.template)
    }

    /// Source URLs with blank entries removed.
    pub fn urls(&self) -> Vec<String> {
        self.source_urls
            .iter()
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Keywords trimmed, blank entries removed, first occurrence kept.
    pub fn clean_keywords(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for keyword in self.keywords.iter().map(|k| k.trim()) {
            if !keyword.is_empty() && !seen.iter().any(|s: &String| s.eq_ignore_ascii_case(keyword)) {
                seen.push(keyword.to_string());
            }
        }
        seen
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_SLIDES..=MAX_SLIDES).contains(&self.slide_count) {
            return Err(AppError::Validation(format!(
                "slideCount must be between {MIN_SLIDES} and {MAX_SLIDES}, got {}",
                self.slide_count
            )));
        }

        let urls = self.urls();
        if urls.len() > MAX_SOURCE_URLS {
            return Err(AppError::Validation(format!(
                "At most {MAX_SOURCE_URLS} source URLs are allowed, got {}",
                urls.len()
            )));
        }

        if let Some(bad) = urls.iter().find(|u| !is_valid_url(u)) {
            return Err(AppError::Validation(format!("Invalid URL: {bad}")));
        }

        if self.source_text.trim().is_empty() && urls.is_empty() {
            return Err(AppError::Validation(
                "Provide source text or at least one source URL".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_json(extra: serde_json::Value) -> GenerationInput {
        let mut base = serde_json::json!({ "sourceText": "Rust ownership explained." });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_defaults_apply_to_minimal_input() {
        let input = input_json(serde_json::json!({}));
        assert_eq!(input.slide_count, 7);
        assert_eq!(input.language, Language::Es);
        assert_eq!(input.audience, Audience::General);
        assert_eq!(input.copy_length, CopyLength::Medium);
        assert_eq!(input.narrative_template(), NarrativeTemplate::Generic);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_kebab_case_ids_deserialize() {
        let input = input_json(serde_json::json!({
            "audience": "tech-leads",
            "technicalDepth": "advanced",
            "copyLength": "short",
            "template": "problem-solution",
            "language": "en"
        }));
        assert_eq!(input.audience, Audience::TechLeads);
        assert_eq!(input.technical_depth, TechnicalDepth::Advanced);
        assert_eq!(input.copy_length, CopyLength::Short);
        assert_eq!(input.narrative_template(), NarrativeTemplate::ProblemSolution);
        assert_eq!(input.language, Language::En);
    }

    #[test]
    fn test_template_ids_are_normalized() {
        assert_eq!(NarrativeTemplate::from_id("How_To"), NarrativeTemplate::HowTo);
        assert_eq!(NarrativeTemplate::from_id("step-by-step"), NarrativeTemplate::HowTo);
        assert_eq!(NarrativeTemplate::from_id(" case-study "), NarrativeTemplate::CaseStudy);
        assert_eq!(NarrativeTemplate::from_id("listicle"), NarrativeTemplate::Generic);
    }

    #[test]
    fn test_slide_count_bounds() {
        for n in [5u8, 10] {
            assert!(input_json(serde_json::json!({ "slideCount": n })).validate().is_ok());
        }
        for n in [0u8, 4, 11] {
            assert!(matches!(
                input_json(serde_json::json!({ "slideCount": n })).validate(),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_more_than_five_urls_rejected() {
        let urls: Vec<String> = (0..6).map(|i| format!("https://e{i}.example")).collect();
        let input = input_json(serde_json::json!({ "sourceUrls": urls }));
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let input = input_json(serde_json::json!({ "sourceUrls": ["ftp://files.example"] }));
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_missing_corpus_rejected() {
        let input = input_json(serde_json::json!({ "sourceText": "   ", "sourceUrls": ["", " "] }));
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_keywords_are_deduplicated_case_insensitively() {
        let input = input_json(serde_json::json!({ "keywords": ["Rust", " rust ", "", "Tokio"] }));
        assert_eq!(input.clean_keywords(), vec!["Rust".to_string(), "Tokio".to_string()]);
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let input = input_json(serde_json::json!({ "apiKey": "secret" }));
        assert_eq!(input.api_key.as_deref(), Some("secret"));
        let out = serde_json::to_string(&input).unwrap();
        assert!(!out.contains("secret"));
    }

    #[test]
    fn test_copy_length_limits() {
        assert_eq!(CopyLength::Short.max_bullets(), 3);
        assert_eq!(CopyLength::Long.max_bullets(), 5);
        assert!(CopyLength::Short.max_words() < CopyLength::Long.max_words());
    }
}
