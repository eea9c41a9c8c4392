//! Fixed vocabularies used by keyword extraction.
//!
//! Both lists are process-wide, read-only constants. They are part of the
//! marking behavior: changing them changes which criteria an answer can
//! satisfy, so they live here rather than in runtime configuration.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Filler words that carry no marking signal and are discarded during
/// extraction: articles, conjunctions, common prepositions and auxiliary
/// verb forms.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is",
        "are", "was", "were", "been", "be", "have", "has", "had",
    ]
    .into_iter()
    .collect()
});

/// Closed vocabulary of multi-word domain phrases recognized as single
/// keywords. Maintained by hand alongside the engine, never inferred.
pub const DOMAIN_PHRASES: &[&str] = &[
    "volatile memory",
    "non-volatile",
    "read only",
    "von neumann",
    "stored program",
    "fetch execute",
    "logic gate",
    "truth table",
    "data type",
    "memory management",
    "file management",
    "operating system",
    "denial of service",
    "local area network",
    "wide area network",
    "ip address",
    "mac address",
    "binary number",
    "hexadecimal",
    "character encoding",
    "lossy compression",
    "lossless compression",
];

/// Returns true if `word` is in the stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
