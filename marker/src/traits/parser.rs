//! Parser Trait
//!
//! This module defines the [`Parser`] trait, a generic interface for parsing
//! raw marking inputs into strongly-typed structures. Implementations are
//! responsible for validating the input and converting it into the
//! appropriate domain model, returning detailed errors on failure.

use util::marking_config::MarkingConfig;

use crate::error::MarkError;

/// A generic trait for parsing data into a strongly-typed Rust structure.
///
/// Implementors should validate the input and return a domain-specific type
/// or a [`MarkError`] on failure.
///
/// # Type Parameters
///
/// * `Input` - The input type to be parsed.
/// * `Output` - The output type produced by the parser.
pub trait Parser<Input, Output> {
    /// Parse an input value into the target type.
    ///
    /// # Errors
    ///
    /// Returns a [`MarkError`] if the input does not conform to the expected
    /// schema or cannot be parsed.
    fn parse(&self, input: Input, config: MarkingConfig) -> Result<Output, MarkError>;
}
