//! Relevance Ranker — orders postings by semantic similarity to the user's description.
//!
//! The query and every posting's comparison text are embedded with the same
//! `Embedder`, scored by cosine similarity, scaled to a two-decimal percentage
//! and stable-sorted so equal scores keep their input order.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::embedding::{cosine_similarity, Embedder, EmbeddingError};
use crate::models::{Posting, ScoredPosting};

/// Field compared against the query when the caller does not name one.
pub const DEFAULT_TITLE_FIELD: &str = "title";

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Embedding batch mismatch: expected {expected} vectors, got {actual}")]
    BatchMismatch { expected: usize, actual: usize },

    #[error("Embedding dimension mismatch: query has {query}, posting has {posting}")]
    DimensionMismatch { query: usize, posting: usize },
}

pub struct RelevanceRanker {
    embedder: Arc<dyn Embedder>,
}

impl RelevanceRanker {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Scores every posting against `query_text` and returns them best-first.
    ///
    /// Never drops a posting. An empty batch returns immediately without
    /// touching the embedder.
    pub async fn rank(
        &self,
        query_text: &str,
        postings: Vec<Posting>,
        title_field: &str,
    ) -> Result<Vec<ScoredPosting>, RankError> {
        if postings.is_empty() {
            return Ok(Vec::new());
        }

        let texts: Vec<String> = postings
            .iter()
            .map(|p| p.field_text(title_field).to_string())
            .collect();

        let query_vec = self.embedder.embed_one(query_text).await?;
        let posting_vecs = self.embedder.embed(&texts).await?;

        if posting_vecs.len() != postings.len() {
            return Err(RankError::BatchMismatch {
                expected: postings.len(),
                actual: posting_vecs.len(),
            });
        }

        let mut scored = Vec::with_capacity(postings.len());
        for (mut posting, vector) in postings.into_iter().zip(&posting_vecs) {
            if vector.len() != query_vec.len() {
                return Err(RankError::DimensionMismatch {
                    query: query_vec.len(),
                    posting: vector.len(),
                });
            }
            // a stale score from an earlier ranking would serialize twice
            posting.fields.remove("match_score");
            let match_score = to_match_score(cosine_similarity(&query_vec, vector));
            scored.push(ScoredPosting {
                posting,
                match_score,
            });
        }

        sort_by_score(&mut scored);

        debug!(
            "Ranked {} postings on '{}' (top score {:.2})",
            scored.len(),
            title_field,
            scored[0].match_score
        );

        Ok(scored)
    }
}

/// Similarity in [-1, 1] to a percentage rounded to two decimals. Not clamped:
/// dissimilar text legitimately scores below zero.
pub fn to_match_score(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}

/// Descending by score. `sort_by` is stable, so ties keep input order.
fn sort_by_score(scored: &mut [ScoredPosting]) {
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
