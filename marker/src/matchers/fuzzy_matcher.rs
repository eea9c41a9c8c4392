//! A matcher that tolerates minor misspellings and truncation.
//!
//! The `FuzzyMatcher` first checks for the keyword as a literal substring of
//! the answer. When that fails and the keyword is long enough, it slides a
//! window of `ceil(len * threshold)` characters over the keyword and accepts
//! if any window occurs literally in the answer. Short keywords produce too
//! many false positives under that scheme, so they only ever match exactly.

use util::marking_config::MarkingConfig;

use crate::traits::matcher::KeywordMatcher;

/// Substring matcher with sliding-window partial matching.
///
/// The thresholds come from [`MarkingConfig`]; the stock values are 0.75 of
/// the keyword and a minimum keyword length of 4.
pub struct FuzzyMatcher {
    threshold: f64,
    min_keyword_len: usize,
}

impl FuzzyMatcher {
    pub fn new(threshold: f64, min_keyword_len: usize) -> Self {
        Self {
            threshold,
            min_keyword_len,
        }
    }

    pub fn from_config(config: &MarkingConfig) -> Self {
        Self::new(config.fuzzy_threshold, config.fuzzy_min_keyword_len)
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::from_config(&MarkingConfig::default_config())
    }
}

impl KeywordMatcher for FuzzyMatcher {
    fn matches(&self, answer: &str, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }
        if answer.contains(keyword) {
            return true;
        }

        let chars: Vec<char> = keyword.chars().collect();
        if chars.len() < self.min_keyword_len {
            return false;
        }

        let window = (chars.len() as f64 * self.threshold).ceil() as usize;
        if window == 0 || window > chars.len() {
            return false;
        }

        chars.windows(window).any(|w| {
            let needle: String = w.iter().collect();
            answer.contains(&needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_substring_matches() {
        let matcher = FuzzyMatcher::default();
        assert!(matcher.matches("ram is volatile memory", "volatile"));
        assert!(matcher.matches("ram is volatile memory", "volatile memory"));
    }

    #[test]
    fn misspelled_keyword_matches_partially() {
        let matcher = FuzzyMatcher::default();
        // "photosynthesis" is 14 chars, window 11; the answer carries a
        // 12-char prefix of it.
        assert!(matcher.matches("plants perform photosynthes daily", "photosynthesis"));
    }

    #[test]
    fn heavy_truncation_does_not_match() {
        let matcher = FuzzyMatcher::default();
        assert!(!matcher.matches("a photo of a leaf", "photosynthesis"));
    }

    #[test]
    fn short_keywords_only_match_exactly() {
        let matcher = FuzzyMatcher::default();
        assert!(matcher.matches("the cpu fetches", "cpu"));
        assert!(!matcher.matches("the cp register", "cpu"));
    }

    #[test]
    fn four_char_keyword_is_fuzzy_eligible() {
        let matcher = FuzzyMatcher::default();
        // window = ceil(4 * 0.75) = 3: "dat" occurs even though "data" does not.
        assert!(matcher.matches("stores dat in tables", "data"));
    }

    #[test]
    fn empty_inputs_never_match() {
        let matcher = FuzzyMatcher::default();
        assert!(!matcher.matches("anything", ""));
        assert!(!matcher.matches("", "keyword"));
    }

    #[test]
    fn threshold_is_overridable() {
        // At 1.0 the only window is the whole keyword: exact match only.
        let strict = FuzzyMatcher::new(1.0, 4);
        assert!(!strict.matches("plants perform photosynthes daily", "photosynthesis"));

        let loose = FuzzyMatcher::new(0.5, 4);
        assert!(loose.matches("a photosyn experiment", "photosynthesis"));
    }
}
