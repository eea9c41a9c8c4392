//! Tunables for the marking engine.
//!
//! `MarkingConfig` carries the constants that govern fuzzy keyword matching
//! and token extraction. Every field has a serde default, so a partial (or
//! empty) JSON config deserializes to working values. The defaults are the
//! values the marking behavior was originally calibrated with; they are
//! deliberately exposed as overridable configuration rather than re-derived.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MarkingConfig {
    /// Fraction of a keyword's length that must appear contiguously in the
    /// answer for a partial match (0.0–1.0).
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Keywords shorter than this never match fuzzily, only exactly.
    #[serde(default = "default_fuzzy_min_keyword_len")]
    pub fuzzy_min_keyword_len: usize,

    /// Tokens of this length or shorter are discarded during keyword
    /// extraction.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

fn default_fuzzy_threshold() -> f64 {
    0.75
}

fn default_fuzzy_min_keyword_len() -> usize {
    4
}

fn default_min_token_len() -> usize {
    2
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            fuzzy_min_keyword_len: default_fuzzy_min_keyword_len(),
            min_token_len: default_min_token_len(),
        }
    }
}

impl MarkingConfig {
    /// The stock configuration used when no overrides are supplied.
    pub fn default_config() -> Self {
        Self::default()
    }
}
