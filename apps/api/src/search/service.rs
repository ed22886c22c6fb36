//! Search pipeline — description → keywords → provider query → ranked postings.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jobs::{JobQuery, JobSource};
use crate::keywords::KeywordExtractor;
use crate::models::ScoredPosting;
use crate::ranking::RelevanceRanker;
use crate::search::dates::format_posted_date;
use crate::search::export::write_csv;

/// Provider field compared against the user's description.
pub const RANKING_FIELD: &str = "job_title";

/// Label attached to every result fetched from the listing provider.
pub const API_SOURCE: &str = "API";

const ANNOTATION_KEYS: [&str; 2] = ["source", "date_posted"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub description: String,
    pub city: String,
    /// Accepted for compatibility; the provider has no state filter.
    #[allow(dead_code)]
    pub state: String,
    pub country: String,
    pub date_posted: String,
}

/// A ranked posting annotated for display.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    #[serde(flatten)]
    pub scored: ScoredPosting,
    pub source: String,
    pub date_posted: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub keywords: Vec<String>,
    pub query: String,
    pub jobs: Vec<JobResult>,
}

pub struct SearchService {
    keywords: Arc<KeywordExtractor>,
    ranker: Arc<RelevanceRanker>,
    jobs: Arc<dyn JobSource>,
    keyword_count: usize,
    result_limit: usize,
    csv_export_path: Option<PathBuf>,
}

impl SearchService {
    pub fn new(
        keywords: Arc<KeywordExtractor>,
        ranker: Arc<RelevanceRanker>,
        jobs: Arc<dyn JobSource>,
        keyword_count: usize,
        result_limit: usize,
        csv_export_path: Option<PathBuf>,
    ) -> Self {
        Self {
            keywords,
            ranker,
            jobs,
            keyword_count,
            result_limit,
            csv_export_path,
        }
    }

    /// Runs the full pipeline for one request.
    ///
    /// Provider, keyword and ranking failures all propagate; an empty `jobs`
    /// list only ever means the provider found nothing.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchOutcome, AppError> {
        let description = request.description.trim();
        if description.is_empty() {
            return Err(AppError::Validation(
                "Please enter a job description.".to_string(),
            ));
        }

        let keywords = self
            .keywords
            .extract_keywords(description, self.keyword_count)
            .await?;

        let mut query = JobQuery::from_keywords(&keywords, Some(request.city.as_str()));
        query.country = Some(request.country);
        query.date_posted = Some(request.date_posted);

        let postings = self.jobs.search(&query).await?;
        let fetched = postings.len();

        let ranked = self
            .ranker
            .rank(&request.description, postings, RANKING_FIELD)
            .await?;

        let jobs: Vec<JobResult> = ranked
            .into_iter()
            .take(self.result_limit)
            .map(|mut scored| {
                let date_posted =
                    format_posted_date(scored.posting.get_str("job_posted_at_datetime_utc"));
                // annotations replace provider keys of the same name
                for key in ANNOTATION_KEYS {
                    scored.posting.fields.remove(key);
                }
                JobResult {
                    scored,
                    source: API_SOURCE.to_string(),
                    date_posted,
                }
            })
            .collect();

        info!(
            "Search '{}' fetched {} postings, returning {}",
            query.query,
            fetched,
            jobs.len()
        );

        self.export(&jobs).await;

        Ok(SearchOutcome {
            keywords,
            query: query.query,
            jobs,
        })
    }

    /// Best-effort CSV export; failures are logged, never returned.
    async fn export(&self, jobs: &[JobResult]) {
        let Some(path) = self.csv_export_path.clone() else {
            return;
        };

        let rows = jobs.to_vec();
        let result = tokio::task::spawn_blocking(move || write_csv(&path, &rows)).await;
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("CSV export failed: {e:?}"),
            Err(e) => warn!("CSV export task panicked: {e}"),
        }
    }
}
