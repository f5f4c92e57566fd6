//! Application state management
//!
//! Author: hephaex@gmail.com

use qna_core::config::AppConfig;
use qna_core::{CompletionClient, QaLogRepository};
use std::sync::Arc;

/// Application state shared across handlers
///
/// Immutable after startup; handlers share it behind an `Arc`.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Completion client
    pub completion: Arc<dyn CompletionClient>,
    /// QA log store; absent when the database was unreachable at startup
    /// (degraded mode: questions are answered but nothing is logged)
    pub log_store: Option<Arc<dyn QaLogRepository>>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        config: AppConfig,
        completion: Arc<dyn CompletionClient>,
        log_store: Option<Arc<dyn QaLogRepository>>,
    ) -> Self {
        Self {
            config,
            completion,
            log_store,
        }
    }
}
