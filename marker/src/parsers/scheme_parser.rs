//! Mark Scheme Parser
//!
//! This module provides the [`SchemeParser`] for parsing a raw mark-scheme
//! text block into an ordered sequence of [`MarkingPoint`]s.
//!
//! # Input format
//!
//! Mark schemes are bullet lists, one criterion per line:
//!
//! ```text
//! Mark scheme:
//! - Explains RAM is volatile memory (1 mark)
//! - Explains ROM is non-volatile (1 mark)
//! ```
//!
//! - Blank lines are skipped.
//! - Lines containing "mark scheme" or "award 1 mark" (case-insensitive) are
//!   formatting boilerplate, not criteria.
//! - A line is a criterion only if its first non-whitespace character is a
//!   bullet marker (`-` or `•`). Anything else is prose and is ignored.
//! - A parenthesized `(n mark)` / `(n marks)` annotation sets the point's
//!   value; the first annotation on a line wins and the default is 1.
//! - Criteria whose descriptions yield no keywords are unscoreable and are
//!   dropped.
//!
//! A scheme with no bullet lines at all parses to an empty sequence. That is
//! not an error; the engine grades it as "no criteria matched".

use once_cell::sync::Lazy;
use regex::Regex;
use util::marking_config::MarkingConfig;

use crate::error::MarkError;
use crate::traits::parser::Parser;
use crate::types::MarkingPoint;
use crate::utilities::keyword_extractor::extract_keywords;

/// Parser for bullet-list mark schemes.
pub struct SchemeParser;

/// `(3 marks)` / `(1 mark)`, case-insensitive, optional space before `mark`.
static MARK_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\((\d+)\s*marks?\)").expect("mark annotation pattern is valid"));

impl<'a> Parser<&'a str, Vec<MarkingPoint>> for SchemeParser {
    fn parse(&self, input: &'a str, config: MarkingConfig) -> Result<Vec<MarkingPoint>, MarkError> {
        let mut points = Vec::new();

        for line in input.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let lowered = trimmed.to_lowercase();
            if lowered.contains("mark scheme") || lowered.contains("award 1 mark") {
                continue;
            }

            if !(trimmed.starts_with('-') || trimmed.starts_with('•')) {
                continue;
            }

            let cleaned = trimmed
                .trim_start_matches(|c: char| c == '-' || c == '•' || c.is_whitespace())
                .trim();

            // First annotation sets the value; a literal "(0 marks)" clamps
            // to the invariant minimum of 1.
            let marks = MARK_ANNOTATION
                .captures(cleaned)
                .and_then(|caps| caps[1].parse::<u32>().ok())
                .unwrap_or(1)
                .max(1);

            let description = MARK_ANNOTATION.replace_all(cleaned, "").trim().to_string();

            let keywords = extract_keywords(&description, config.min_token_len);
            if keywords.is_empty() {
                tracing::debug!(line = %trimmed, "criterion yields no keywords; dropped");
                continue;
            }

            points.push(MarkingPoint {
                description,
                keywords,
                marks,
            });
        }

        Ok(points)
    }
}
