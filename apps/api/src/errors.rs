use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::ProviderError;
use crate::keywords::KeywordError;
use crate::ranking::RankError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Dependency failures map to 502 so a caller can always tell a failed search
/// apart from one that legitimately found nothing.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Keyword extraction error: {0}")]
    Keywords(#[from] KeywordError),

    #[error("Ranking error: {0}")]
    Ranking(#[from] RankError),

    #[error("Job provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Keywords(e) => {
                tracing::error!("Keyword extraction error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "KEYWORD_ERROR",
                    "Keyword extraction is unavailable".to_string(),
                )
            }
            AppError::Ranking(e) => {
                tracing::error!("Ranking error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RANKING_ERROR",
                    "Relevance ranking is unavailable".to_string(),
                )
            }
            AppError::Provider(e) => {
                tracing::error!("Job provider error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "The job listing provider could not be reached".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
