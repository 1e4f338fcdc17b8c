pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Shared state for the API. Scans are synchronous per-request and nothing
/// is persisted, so this is configuration only — no database handle, no
/// active-scan registry.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

pub fn create_app_state(config: AppConfig) -> AppState {
    AppState { config: Arc::new(config) }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/scan", post(routes::scan::run_scan))
        .route("/api/chat", post(routes::chat::chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
