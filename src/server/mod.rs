pub mod handlers;
mod pages;
mod types;

use crate::{Result, advisor::AdviceRequester, config::Config, llm::GeminiClient};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

// Uploaded photos can be a few megabytes; axum's default 2 MB limit is too
// tight for them.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form))
        .route("/advice", post(handlers::advice))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the advice backend
    let backend = GeminiClient::new(config.llm.clone())?;
    let requester = AdviceRequester::new(Arc::new(backend));

    // Create application state
    let app_state = handlers::AppState {
        requester: Arc::new(requester),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
