//! POST /api/fetch-url and /api/fetch-urls: reader-service proxy routes.
//!
//! The single-URL route keeps its own flat wire shape (`{success, content, url}` /
//! `{error, url}`) rather than the nested `AppError` body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::fetch::reader::{fetch_multiple_urls, is_valid_url};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FetchUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FetchUrlResponse {
    pub success: bool,
    pub content: String,
    pub url: String,
}

#[derive(Debug)]
pub struct FetchUrlError {
    status: StatusCode,
    message: String,
    url: String,
}

impl IntoResponse for FetchUrlError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.message, "url": self.url })),
        )
            .into_response()
    }
}

/// POST /api/fetch-url
pub async fn handle_fetch_url(
    State(state): State<AppState>,
    Json(request): Json<FetchUrlRequest>,
) -> Result<Json<FetchUrlResponse>, FetchUrlError> {
    let url = request.url.unwrap_or_default().trim().to_string();

    if url.is_empty() {
        return Err(FetchUrlError {
            status: StatusCode::BAD_REQUEST,
            message: "URL is required".to_string(),
            url,
        });
    }

    if !is_valid_url(&url) {
        return Err(FetchUrlError {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid URL format".to_string(),
            url,
        });
    }

    match state.fetcher.fetch_text(&url).await {
        Ok(content) => Ok(Json(FetchUrlResponse {
            success: true,
            content,
            url,
        })),
        Err(e) => {
            error!("Failed to fetch {url}: {e}");
            Err(FetchUrlError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Failed to fetch URL content: {e}"),
                url,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchUrlsRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FetchUrlsResponse {
    pub content: String,
}

/// POST /api/fetch-urls
///
/// Fetches up to five URLs in order. Failures are annotated inline in `content`
/// and never fail the request.
pub async fn handle_fetch_urls(
    State(state): State<AppState>,
    Json(request): Json<FetchUrlsRequest>,
) -> Json<FetchUrlsResponse> {
    let content = fetch_multiple_urls(state.fetcher.as_ref(), &request.urls).await;
    Json(FetchUrlsResponse { content })
}
