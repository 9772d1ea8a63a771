//! Axum router setup for the Wayfinder server

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    ServerState,
    handlers::{get_path, health_check, list_buildings},
};

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // REST API endpoints
        .route("/api/buildings", get(list_buildings))
        .route("/api/path", get(get_path))
        .route("/api/health", get(health_check))
        // The map UI is served from a different origin during development
        .layer(CorsLayer::permissive())
        .with_state(state)
}
