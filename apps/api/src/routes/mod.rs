pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/search", post(handlers::handle_search))
        .route("/api/keywords", post(handlers::handle_keywords))
        .route("/api/rank", post(handlers::handle_rank))
        .with_state(state)
}
