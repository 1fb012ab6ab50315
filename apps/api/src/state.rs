use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Compiled once at startup; read-only afterwards.
    pub parser: Arc<DocumentParser>,
    pub config: Config,
}
