use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};
use crate::config::WebConfig;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api::router(state)).layer(cors)
}

pub async fn run(config: &WebConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server terminated unexpectedly")?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
