//! Question handler
//!
//! Author: hephaex@gmail.com

use crate::error::{AppError, INVALID_QUESTION};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use qna_core::{LogOutcome, QaExchange};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Ask request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    /// User's question
    #[schema(example = "What is 2+2?")]
    #[serde(default)]
    pub question: String,

    /// Reserved for future search augmentation; accepted and ignored
    #[serde(default)]
    pub use_search: bool,
}

/// Ask response body
#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    /// Always "success"
    #[schema(example = "success")]
    pub status: String,

    /// Generated answer
    #[schema(example = "4")]
    pub answer: String,
}

/// Handle question requests
///
/// Validates the question, calls the completion client, and hands the
/// exchange to the log store best-effort: a failed write never affects
/// the response. A failed completion leaves no log record.
#[utoipa::path(
    post,
    path = "/ask",
    tag = "ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Question answered", body = AskResponse),
        (status = 400, description = "Empty or missing question", body = crate::error::ErrorBody),
        (status = 500, description = "Answer generation failed", body = crate::error::ErrorBody)
    )
)]
pub async fn ask_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest(INVALID_QUESTION.to_string()));
    }

    if req.use_search {
        tracing::debug!("use_search requested; search augmentation is not implemented");
    }

    let answer = state.completion.complete(question).await?;

    if let Some(store) = &state.log_store {
        let exchange = QaExchange::new(question, answer.as_str(), Utc::now());
        match store.record(&exchange).await {
            LogOutcome::Logged { id } => tracing::debug!(id, "qa exchange logged"),
            // Already reported at the store boundary
            LogOutcome::Failed => {}
        }
    }

    Ok((
        StatusCode::OK,
        Json(AskResponse {
            status: "success".to_string(),
            answer,
        }),
    ))
}
