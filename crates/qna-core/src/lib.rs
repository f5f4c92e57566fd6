//! QnA Core - Domain models, traits, and shared types
//!
//! This crate defines the core abstractions used throughout the gateway:
//! - Question/answer exchange models
//! - Common error types
//! - The completion-client trait implemented by provider crates
//! - Configuration management
//! - QA log storage (PostgreSQL)

pub mod config;
pub mod store;

pub use config::{AppConfig, ConfigError, DatabaseConfig, LlmConfig, LlmProvider, ServerConfig};
pub use store::{LogOutcome, QaLogRepository, QaLogStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for gateway operations
#[derive(Error, Debug)]
pub enum QnaError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, QnaError>;

// ============================================================================
// Domain Models
// ============================================================================

/// A question/answer pair ready to be persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaExchange {
    /// The user's question, trimmed
    pub question: String,

    /// The generated answer
    pub answer: String,

    /// When the exchange completed, assigned by the front door
    pub timestamp: DateTime<Utc>,
}

impl QaExchange {
    /// Create a new exchange
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            timestamp,
        }
    }

    /// Check the non-empty invariants before persisting
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(QnaError::Validation("question must not be empty".to_string()));
        }
        if self.answer.trim().is_empty() {
            return Err(QnaError::Validation("answer must not be empty".to_string()));
        }
        Ok(())
    }
}

/// A persisted QA record
///
/// Records are append-only: once written they are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    /// Auto-incrementing identifier
    pub id: i64,

    /// The question as it was asked
    pub question: String,

    /// The generated answer
    pub answer: String,

    /// Exchange timestamp supplied by the front door
    pub timestamp: DateTime<Utc>,

    /// Insert time assigned by the database
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Traits
// ============================================================================

/// Trait for chat-completion clients
///
/// Each call is stateless and independent: one prompt in, one answer out.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate an answer for a single prompt
    async fn complete(&self, prompt: &str) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_validate_ok() {
        let exchange = QaExchange::new("What is 2+2?", "4", Utc::now());
        assert!(exchange.validate().is_ok());
    }

    #[test]
    fn test_exchange_rejects_empty_question() {
        let exchange = QaExchange::new("", "4", Utc::now());
        assert!(matches!(
            exchange.validate(),
            Err(QnaError::Validation(_))
        ));
    }

    #[test]
    fn test_exchange_rejects_whitespace_answer() {
        let exchange = QaExchange::new("What is 2+2?", "   ", Utc::now());
        assert!(matches!(
            exchange.validate(),
            Err(QnaError::Validation(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = QnaError::Completion("upstream timed out".to_string());
        assert_eq!(err.to_string(), "Completion error: upstream timed out");
    }
}
