pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/parse", post(handlers::handle_parse))
        .route("/api/v1/parse/job", post(handlers::handle_parse_job))
        .route("/api/v1/parse/resume", post(handlers::handle_parse_resume))
        .route("/api/v1/parse/upload", post(handlers::handle_parse_upload))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
