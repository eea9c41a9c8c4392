//! # Types Module
//!
//! This module defines the core data structures used throughout the marker
//! system: the criteria parsed out of a mark scheme and the per-criterion
//! outcomes produced while grading.

use serde::Serialize;

/// One scoreable criterion extracted from a mark scheme.
///
/// A point is only ever constructed with at least one keyword; a criterion
/// whose description yields no matchable keywords can never be satisfied and
/// is dropped by the parser instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkingPoint {
    /// The human-readable text of the criterion, used in feedback.
    pub description: String,
    /// Lowercase keywords and domain phrases that satisfy this point.
    /// Deduplicated, in extraction order.
    pub keywords: Vec<String>,
    /// The value of this criterion when matched. Always at least 1.
    pub marks: u32,
}

/// The outcome of evaluating a single marking point against an answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointResult {
    /// The criterion text, carried through for feedback rendering.
    pub description: String,
    /// The marks this point is worth.
    pub marks: u32,
    /// Whether any of the point's keywords was found in the answer.
    pub matched: bool,
    /// The keywords that were found in the answer.
    pub matched_keywords: Vec<String>,
}
