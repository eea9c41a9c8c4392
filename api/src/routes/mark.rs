//! Marking routes.
//!
//! Provides the `POST /api/mark-answer` endpoint that grades a free-text
//! answer against a mark scheme. The request and response shapes are a
//! compatibility contract with existing consumers of the service and must
//! not change.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use marker::{MarkingJob, error::MarkError, report::MarkingResult};
use serde::{Deserialize, Serialize};

/// Fallback feedback returned whenever grading could not run at all.
const RETRY_FEEDBACK: &str = "An error occurred during marking. Please try again.";

/// Request body for `POST /api/mark-answer`.
///
/// Every field is tolerated missing so that incomplete requests produce the
/// protocol's own 400 body rather than a framework rejection. Validation
/// happens in the engine.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkRequest {
    pub user_answer: String,
    pub mark_scheme: String,
    pub marks_available: i64,
    pub question_text: String,
}

/// Response body for `POST /api/mark-answer`.
///
/// Success: `{"success": true, "marksAwarded": n, "feedback": "..."}`.
/// Failure: `{"success": false, "error": "...", "marksAwarded": 0,
/// "feedback": "<retry message>"}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub marks_awarded: u32,
    pub feedback: String,
}

impl MarkResponse {
    fn ok(result: MarkingResult) -> Self {
        Self {
            success: true,
            error: None,
            marks_awarded: result.marks_awarded,
            feedback: result.feedback,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            marks_awarded: 0,
            feedback: RETRY_FEEDBACK.to_string(),
        }
    }
}

/// Builds the marking route group.
pub fn mark_routes() -> Router {
    Router::new().route("/mark-answer", post(mark_answer))
}

/// POST /api/mark-answer
///
/// ### Request Body
/// ```json
/// {
///   "userAnswer": "RAM is volatile memory used for temporary storage",
///   "markScheme": "- Explains RAM is volatile memory (1 mark)",
///   "marksAvailable": 1,
///   "questionText": "Describe the purpose of RAM."
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "marksAwarded": 1,
///   "feedback": "Score: 1/1 marks\n\n..."
/// }
/// ```
///
/// - `400 Bad Request` (missing/empty fields, non-positive marksAvailable)
/// - `500 Internal Server Error` (unexpected grading failure)
/// ```json
/// {
///   "success": false,
///   "error": "marksAvailable must be a positive integer",
///   "marksAwarded": 0,
///   "feedback": "An error occurred during marking. Please try again."
/// }
/// ```
async fn mark_answer(Json(req): Json<MarkRequest>) -> impl IntoResponse {
    // Negative or oversized values fold to 0, which the engine rejects.
    let marks_available = u32::try_from(req.marks_available).unwrap_or(0);

    let job = MarkingJob::new(req.user_answer, req.mark_scheme, marks_available)
        .with_question(req.question_text);

    match job.mark() {
        Ok(result) => (StatusCode::OK, Json(MarkResponse::ok(result))),
        Err(MarkError::InvalidInput(msg)) => {
            tracing::info!(error = %msg, "rejected marking request");
            (StatusCode::BAD_REQUEST, Json(MarkResponse::failure(msg)))
        }
        Err(MarkError::Unexpected(msg)) => {
            tracing::error!(error = %msg, "marking failed unexpectedly");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MarkResponse::failure(msg)),
            )
        }
    }
}
