mod config;
mod embedding;
mod errors;
mod jobs;
mod keywords;
mod models;
mod ranking;
mod routes;
mod search;
mod state;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedding::{Embedder, HttpEmbedder};
use crate::jobs::JSearchClient;
use crate::keywords::{EmbeddingPhraseExtractor, KeywordExtractor, NoiseWords};
use crate::ranking::RelevanceRanker;
use crate::routes::build_router;
use crate::search::SearchService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobscout v{}", env!("CARGO_PKG_VERSION"));

    // One embedder for the whole process: keyphrases and rankings share its vector space
    let http_embedder = HttpEmbedder::new(
        config.embedding_url.clone(),
        config.embedding_model.clone(),
    )?;
    info!(
        "Embedding client initialized (model: {})",
        http_embedder.model()
    );
    let embedder: Arc<dyn Embedder> = Arc::new(http_embedder);

    let noise = match &config.noise_words_file {
        Some(path) => NoiseWords::from_file(path)?,
        None => NoiseWords::default(),
    };
    if noise.is_empty() {
        warn!("Noise denylist is empty; keywords will not be filtered");
    } else {
        info!("Noise denylist loaded ({} words)", noise.len());
    }

    let keywords = Arc::new(KeywordExtractor::new(
        Arc::new(EmbeddingPhraseExtractor::new(embedder.clone())),
        noise,
    ));

    let jobs = JSearchClient::new(
        config.jsearch_url.clone(),
        config.jsearch_host.clone(),
        config.jsearch_api_key.clone(),
    )?;
    info!("Job provider client initialized ({})", config.jsearch_url);

    let ranker = Arc::new(RelevanceRanker::new(embedder));
    let search = SearchService::new(
        keywords.clone(),
        ranker.clone(),
        Arc::new(jobs),
        config.keyword_count,
        config.result_limit,
        config.csv_export_path.clone(),
    );

    // Build app state
    let state = AppState {
        search: Arc::new(search),
        keywords,
        ranker,
        keyword_count: config.keyword_count,
    };

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
