//! Grading output.

use serde::Serialize;

/// The result of one grading call.
///
/// `marks_awarded` is already capped at the marks available for the question.
/// Nothing is retained by the engine after this is returned; whether to store
/// it is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkingResult {
    pub marks_awarded: u32,
    pub feedback: String,
}
