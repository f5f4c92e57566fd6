//! API route definitions
//!
//! Author: hephaex@gmail.com

use crate::handlers::{ask, health, page};
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create application routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(page::index_page))
        .route("/ask", post(ask::ask_handler))
        .route("/health", get(health::health_check))
}

/// Build the CORS layer from the configured origin list
///
/// An empty list keeps the original's open policy: the chat page may be
/// served from anywhere during development.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
