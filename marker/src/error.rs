//! Marker Error Types
//!
//! This module defines the [`MarkError`] enum, covering everything that can go
//! wrong while grading an answer. There are deliberately only two variants:
//! bad caller input is rejected up front, and anything else that fails inside
//! the pipeline is an internal fault the caller can only retry.
//!
//! Grading is deterministic and idempotent, so the engine itself never
//! retries.

use std::fmt;

/// Represents all error types that can occur while marking an answer.
#[derive(Debug)]
pub enum MarkError {
    /// A required input is missing or empty, or the marks available is not a
    /// positive integer. No partial grading is attempted.
    InvalidInput(String),
    /// An internal failure during parsing, matching or feedback assembly.
    /// Guarded against but not expected to occur.
    Unexpected(String),
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkError::InvalidInput(msg) => write!(f, "{msg}"),
            MarkError::Unexpected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MarkError {}
