//! Feedback Trait
//!
//! This module defines the [`Feedback`] trait, used to implement pluggable
//! feedback strategies for the marker system. Each strategy turns the
//! per-point outcomes of a grading run into the text returned to the
//! student.

use crate::error::MarkError;
use crate::types::PointResult;

/// A trait for pluggable feedback strategies in the marker system.
///
/// Implement this trait to define how feedback text is generated from a set
/// of point results. Strategies are synchronous; grading has no suspension
/// points.
///
/// # Arguments
/// - `results`: the per-point outcomes, in mark-scheme order.
/// - `marks_awarded`: the capped total awarded.
/// - `marks_available`: the maximum for the question (always positive).
///
/// # Returns
/// - `Ok(String)`: the complete feedback text.
/// - `Err(MarkError)`: if feedback generation fails.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        results: &[PointResult],
        marks_awarded: u32,
        marks_available: u32,
    ) -> Result<String, MarkError>;
}
