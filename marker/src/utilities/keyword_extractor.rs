//! Keyword extraction.
//!
//! Turns a criterion description into the set of lowercase keywords and
//! domain phrases an answer is matched against. Pure function of its input
//! and the fixed vocabularies in [`vocabulary`](super::vocabulary).

use std::collections::HashSet;

use crate::utilities::vocabulary::{DOMAIN_PHRASES, is_stop_word};

/// Extracts matchable keywords from `text`.
///
/// The input is lowercased, punctuation is replaced with spaces (preserving
/// word boundaries), and the surviving tokens are filtered: anything of
/// length `min_token_len` or shorter goes, as does anything in the stop-word
/// list. The unstripped lowercase text is separately scanned for domain
/// phrases, which are appended as single keywords.
///
/// When a domain phrase is present, its constituent words are dropped from
/// the single-token results: the phrase is the salient unit, and a fragment
/// of it alone ("volatile" for "non-volatile") must not satisfy the
/// criterion.
///
/// The result is deduplicated and in extraction order. Empty or
/// punctuation-only input yields an empty vector.
pub fn extract_keywords(text: &str, min_token_len: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let phrases: Vec<&str> = DOMAIN_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect();

    let stripped: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in stripped.split_whitespace() {
        if token.len() <= min_token_len || is_stop_word(token) {
            continue;
        }
        if phrases.iter().any(|phrase| phrase_has_word(phrase, token)) {
            continue;
        }
        if seen.insert(token) {
            keywords.push(token.to_string());
        }
    }

    for phrase in phrases {
        if seen.insert(phrase) {
            keywords.push(phrase.to_string());
        }
    }

    keywords
}

/// True if `word` is one of the words making up `phrase` (split on
/// non-alphanumeric characters, so "non-volatile" has words "non" and
/// "volatile").
fn phrase_has_word(phrase: &str, word: &str) -> bool {
    phrase
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .any(|w| w == word)
}
