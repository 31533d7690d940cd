/// LLM Client: the single point of entry for all Gemini API calls.
///
/// No other module may call the generative-AI API directly.
/// The key and model id travel with each request (they live in the user's browser
/// settings); the service configuration only supplies fallbacks.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GENERATION_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Missing API key")]
    MissingApiKey,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Key and model id used for a single generation call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub model: String,
}

impl Credentials {
    /// Request-supplied values win over configured fallbacks. Blank strings count as absent.
    pub fn resolve(
        api_key: Option<&str>,
        model: Option<&str>,
        fallback_key: Option<&str>,
        fallback_model: &str,
    ) -> Result<Self, LlmError> {
        let non_blank = |s: &&str| !s.trim().is_empty();
        let api_key = api_key
            .filter(non_blank)
            .or(fallback_key.filter(non_blank))
            .ok_or(LlmError::MissingApiKey)?;
        let model = model.filter(non_blank).unwrap_or(fallback_model);
        Ok(Self {
            api_key: api_key.trim().to_string(),
            model: model.trim().to_string(),
        })
    }
}

/// Anything that turns a prompt into model text. `GeminiClient` in production,
/// canned responses in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, credentials: &Credentials) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// A function that tries to pull the model's text out of one known response shape.
type TextExtractor = fn(&Value) -> Option<String>;

/// Response shapes seen from the generation API, tried in order.
const RESPONSE_TEXT_EXTRACTORS: &[TextExtractor] = &[
    text_from_plain_string,
    text_from_text_field,
    text_from_candidates,
];

/// The body is itself a JSON string.
fn text_from_plain_string(body: &Value) -> Option<String> {
    body.as_str().map(str::to_string)
}

/// `{ "text": "..." }`
fn text_from_text_field(body: &Value) -> Option<String> {
    body.get("text").and_then(Value::as_str).map(str::to_string)
}

/// `{ "candidates": [ { "content": { "parts": [ { "text": "..." } ] } } ] }`
fn text_from_candidates(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    Some(text)
}

/// Runs the extractors in order and returns the first non-blank text.
pub fn extract_response_text(body: &Value) -> Option<String> {
    RESPONSE_TEXT_EXTRACTORS
        .iter()
        .filter_map(|extract| extract(body))
        .find(|text| !text.trim().is_empty())
}

/// Thin wrapper over the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Single attempt. A failed call surfaces to the user, who may retry from the UI.
    async fn generate(&self, prompt: &str, credentials: &Credentials) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(self.endpoint(&credentials.model))
            .header("x-goog-api-key", &credentials.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        let text = extract_response_text(&body).ok_or(LlmError::EmptyContent)?;

        debug!(
            "LLM call succeeded: model={}, prompt_chars={}, response_chars={}",
            credentials.model,
            prompt.len(),
            text.len()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_text_from_plain_string_body() {
        let body = json!("{\"slides\": []}");
        assert_eq!(extract_response_text(&body).as_deref(), Some("{\"slides\": []}"));
    }

    #[test]
    fn test_extracts_text_from_text_field() {
        let body = json!({"text": "hola"});
        assert_eq!(extract_response_text(&body).as_deref(), Some("hola"));
    }

    #[test]
    fn test_extracts_and_joins_candidate_parts() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "```json\n{"}, {"text": "}\n```"}]},
                "finishReason": "STOP"
            }]
        });
        assert_eq!(
            extract_response_text(&body).as_deref(),
            Some("```json\n{}\n```")
        );
    }

    #[test]
    fn test_blank_text_falls_through_to_next_shape() {
        let body = json!({
            "text": "   ",
            "candidates": [{"content": {"parts": [{"text": "real"}]}}]
        });
        assert_eq!(extract_response_text(&body).as_deref(), Some("real"));
    }

    #[test]
    fn test_unknown_shape_yields_none() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert!(extract_response_text(&body).is_none());
    }

    #[test]
    fn test_credentials_prefer_request_values() {
        let c = Credentials::resolve(Some("req-key"), Some("gemini-x"), Some("cfg-key"), "gemini-d")
            .unwrap();
        assert_eq!(c.api_key, "req-key");
        assert_eq!(c.model, "gemini-x");
    }

    #[test]
    fn test_credentials_fall_back_to_config() {
        let c = Credentials::resolve(Some("  "), None, Some("cfg-key"), "gemini-d").unwrap();
        assert_eq!(c.api_key, "cfg-key");
        assert_eq!(c.model, "gemini-d");
    }

    #[test]
    fn test_credentials_without_any_key_fail() {
        let err = Credentials::resolve(None, None, None, "gemini-d").unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("https://example.test/v1beta/", Duration::from_secs(5))
            .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.0-flash"),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
