use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_READER_BASE_URL: &str = "https://r.jina.ai/";
pub const DEFAULT_BRAND_COLOR: &str = "#0A66C2";
pub const DEFAULT_MAX_EDITOR_SESSIONS: usize = 500;

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: the Gemini key may arrive with each request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_timeout_secs: u64,
    pub reader_base_url: String,
    pub reader_api_key: Option<String>,
    pub fetch_timeout_secs: u64,
    pub brand_name: String,
    pub brand_color: String,
    /// Editor sessions kept in memory before the least recently saved is evicted.
    pub max_editor_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            reader_base_url: optional_env("READER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_READER_BASE_URL.to_string()),
            reader_api_key: optional_env("READER_API_KEY"),
            fetch_timeout_secs: parse_env("FETCH_TIMEOUT_SECS", 30)?,
            brand_name: optional_env("BRAND_NAME").unwrap_or_default(),
            brand_color: optional_env("BRAND_COLOR")
                .unwrap_or_else(|| DEFAULT_BRAND_COLOR.to_string()),
            max_editor_sessions: parse_env("MAX_EDITOR_SESSIONS", DEFAULT_MAX_EDITOR_SESSIONS)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            llm_timeout_secs: 120,
            reader_base_url: DEFAULT_READER_BASE_URL.to_string(),
            reader_api_key: None,
            fetch_timeout_secs: 30,
            brand_name: String::new(),
            brand_color: DEFAULT_BRAND_COLOR.to_string(),
            max_editor_sessions: DEFAULT_MAX_EDITOR_SESSIONS,
        }
    }
}

/// Blank values are treated as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
