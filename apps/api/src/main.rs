use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use extract_api::config::Config;
use extract_api::extraction::{DocumentParser, Taxonomy};
use extract_api::routes::build_router;
use extract_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting extract-api v{}", env!("CARGO_PKG_VERSION"));

    let taxonomy = match &config.taxonomy_path {
        Some(path) => Taxonomy::from_json_file(path)?,
        None => Taxonomy::default(),
    };
    let parser = DocumentParser::new(&taxonomy)
        .with_context(|| format!("Failed to compile taxonomy '{}'", taxonomy.version))?;
    info!("Pattern tables compiled (taxonomy {})", parser.taxonomy_version());

    let state = AppState {
        parser: Arc::new(parser),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
