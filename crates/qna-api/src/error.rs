//! API error handling
//!
//! Author: hephaex@gmail.com

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qna_core::QnaError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed message returned for an empty or missing question
pub const INVALID_QUESTION: &str = "Please provide a valid question.";

/// Generic message returned when answer generation fails; the underlying
/// error detail stays in the server log
pub const COMPLETION_FAILED: &str = "An error occurred while generating the answer.";

/// Error payload returned to clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always "error"
    pub status: String,
    /// Human-readable message
    pub answer: String,
}

impl ErrorBody {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            answer: answer.into(),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Client error; the message is returned verbatim
    BadRequest(String),
    /// Server error; the detail is logged and a generic message returned
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            AppError::Internal(detail) => {
                tracing::error!("request failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(COMPLETION_FAILED),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<QnaError> for AppError {
    fn from(err: QnaError) -> Self {
        match err {
            QnaError::Validation(_) => AppError::BadRequest(INVALID_QUESTION.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}
