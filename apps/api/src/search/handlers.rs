//! Axum route handlers for the Search API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Posting, ScoredPosting};
use crate::ranking::DEFAULT_TITLE_FIELD;
use crate::search::service::SearchOutcome;
use crate::search::SearchRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub query: String,
    #[serde(default)]
    pub postings: Vec<Posting>,
    /// Posting field compared against the query. Defaults to the title.
    pub title_field: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub postings: Vec<ScoredPosting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/search
///
/// Extracts keywords from the description, queries the job provider and
/// returns postings ranked by semantic similarity to the description.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchOutcome>, AppError> {
    let outcome = state.search.search(request).await?;
    Ok(Json(outcome))
}

/// POST /api/keywords
///
/// Previews the search terms a description would produce.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let top_n = request.top_n.unwrap_or(state.keyword_count);
    if top_n == 0 {
        return Err(AppError::Validation("top_n must be positive".to_string()));
    }

    let keywords = state.keywords.extract_keywords(&request.text, top_n).await?;
    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/rank
///
/// Ranks caller-supplied postings against a query without touching the job
/// provider. Unknown posting fields are echoed back unchanged.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let title_field = request.title_field.as_deref().unwrap_or(DEFAULT_TITLE_FIELD);
    let postings = state
        .ranker
        .rank(&request.query, request.postings, title_field)
        .await?;
    Ok(Json(RankResponse { postings }))
}
