//! HTTP surface: one POST endpoint per page family plus a static docs page.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::config::HacConfig;
use crate::core::Hac;

pub fn router(config: Arc<HacConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::docs))
        .route("/api/info", post(handlers::info))
        .route("/api/schedule", post(handlers::schedule))
        .route("/api/currentclasses", post(handlers::current_classes))
        .route("/api/classes", post(handlers::classes))
        .route("/api/transcript", post(handlers::transcript))
        .route("/api/gpa", post(handlers::gpa))
        .route("/api/all", post(handlers::all))
        .layer(cors)
        .with_state(Hac::new(config))
}

/// Binds `config.listen_addr` and serves until the process is stopped.
pub async fn serve(config: HacConfig) -> anyhow::Result<()> {
    let addr = config.listen_addr;
    info!("portal base url: {}", config.base_url);

    let app = router(Arc::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
