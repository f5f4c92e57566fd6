//! QnA Gateway API server
//!
//! HTTP front door for the question-answering gateway: serves the chat
//! page, accepts questions, and exposes a liveness check.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::ask::ask_handler,
        handlers::health::health_check,
    ),
    components(schemas(
        handlers::ask::AskRequest,
        handlers::ask::AskResponse,
        handlers::health::HealthResponse,
        error::ErrorBody,
    )),
    tags(
        (name = "ask", description = "Question answering"),
        (name = "health", description = "Liveness probes")
    )
)]
pub struct ApiDoc;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = routes::cors_layer(&state.config.server.cors_origins);

    Router::new()
        .merge(routes::api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
