use std::sync::Arc;

use crate::keywords::KeywordExtractor;
use crate::ranking::RelevanceRanker;
use crate::search::SearchService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The embedder behind both services is loaded once at startup and shared
/// read-only across requests.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub keywords: Arc<KeywordExtractor>,
    pub ranker: Arc<RelevanceRanker>,
    /// Keyword count used when a request does not ask for one.
    pub keyword_count: usize,
}
