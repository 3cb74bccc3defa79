pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the application router over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/products", post(handlers::create_product))
        .route("/orders", post(handlers::place_order))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(middleware::log_requests))
}

/// Bind `addr` and serve until the process exits
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (is the port already in use?)",
            addr,
            e
        )
    })?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
