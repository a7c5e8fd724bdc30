//! HTTP layer exposing stored articles and topic payloads.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState { settings };
    let router = Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/sources", get(routes::list_sources))
        .route("/api/articles", get(routes::list_articles))
        .route("/api/articles/:id", get(routes::get_article))
        .route("/api/topics", get(routes::topic_payload))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving newslens API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
