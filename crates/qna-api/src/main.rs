//! QnA Gateway API Server
//!
//! Accepts natural-language questions over HTTP, forwards them to a
//! chat-completion API, and logs each exchange to PostgreSQL.
//!
//! Author: hephaex@gmail.com

use qna_api::{create_router, state::AppState};
use qna_core::config::AppConfig;
use qna_core::store::QaLogStore;
use qna_core::QaLogRepository;
use qna_llm::create_completion_client;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().unwrap_or_default();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "qna_api={level},qna_core={level},qna_llm={level},tower_http=debug",
                    level = config.logging.level
                ))
            }),
        )
        .init();

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Completion client; a missing credential fails per call, not here
    let completion = create_completion_client(&config.llm);

    // Log store; an unreachable database degrades to answering without logging
    let log_store = match QaLogStore::prepare(&config.database).await {
        Ok(store) => {
            if let Err(e) = store.ensure_schema().await {
                tracing::warn!("schema creation failed: {e}");
            }
            Some(Arc::new(store) as Arc<dyn QaLogRepository>)
        }
        Err(e) => {
            tracing::warn!("log store unavailable, running without persistence: {e}");
            None
        }
    };

    // Create application state
    let state = Arc::new(AppState::new(config, completion, log_store));

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("QnA Gateway starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
