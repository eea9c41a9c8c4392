//! # Marker Library
//!
//! Core logic for automated marking of free-text short answers against a
//! structured mark scheme. It parses the scheme into discrete marking
//! points, matches a candidate answer against each point's keywords with
//! exact and fuzzy substring matching, caps and aggregates the score, and
//! synthesizes tiered feedback text.
//!
//! ## Key Concepts
//! - **MarkingJob**: the entry point representing one grading run for a
//!   single answer.
//! - **Matchers**: pluggable strategies deciding whether an answer contains
//!   a keyword (e.g. fuzzy substring matching).
//! - **Feedback**: pluggable strategies turning per-point outcomes into the
//!   text shown to the student.
//!
//! Grading is a pure, synchronous computation: no I/O, no shared mutable
//! state, nothing retained between calls. Concurrent grading calls are
//! independent by construction.

pub mod error;
pub mod feedback;
pub mod matchers;
pub mod parsers;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::error::MarkError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::matchers::fuzzy_matcher::FuzzyMatcher;
use crate::parsers::scheme_parser::SchemeParser;
use crate::report::MarkingResult;
use crate::scorer::cap_marks;
use crate::traits::feedback::Feedback;
use crate::traits::matcher::KeywordMatcher;
use crate::traits::parser::Parser;
use crate::types::PointResult;

use util::marking_config::MarkingConfig;

/// Represents one grading run for a single answer.
///
/// Encapsulates the inputs and strategy choices needed to grade an answer
/// against a mark scheme.
///
/// # Fields
/// - `answer`: the candidate's free-text answer.
/// - `mark_scheme`: the raw mark-scheme text block.
/// - `marks_available`: the ceiling for this question.
/// - `question`: the question text, accepted for context but not used for
///   scoring.
/// - `matcher`: strategy deciding keyword containment (fuzzy by default).
/// - `feedback`: strategy rendering the feedback text.
pub struct MarkingJob<'a> {
    answer: String,
    mark_scheme: String,
    marks_available: u32,
    question: Option<String>,
    matcher: Option<Box<dyn KeywordMatcher + 'a>>,
    feedback: Box<dyn Feedback + 'a>,
    config: MarkingConfig,
}

impl<'a> MarkingJob<'a> {
    /// Create a new marking job with the required inputs.
    ///
    /// # Arguments
    /// * `answer` - The candidate's answer text.
    /// * `mark_scheme` - The raw mark-scheme text.
    /// * `marks_available` - The maximum marks for the question.
    pub fn new(
        answer: impl Into<String>,
        mark_scheme: impl Into<String>,
        marks_available: u32,
    ) -> Self {
        Self {
            answer: answer.into(),
            mark_scheme: mark_scheme.into(),
            marks_available,
            question: None,
            matcher: None,
            feedback: Box::new(AutoFeedback),
            config: MarkingConfig::default_config(),
        }
    }

    /// Attach the question text for context. It is not used for scoring.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Set a custom keyword matcher strategy for this job.
    pub fn with_matcher<M: KeywordMatcher + 'a>(mut self, matcher: M) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Set a custom feedback strategy for this job.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Override the marking tunables. The default matcher picks up the new
    /// thresholds.
    pub fn with_config(mut self, config: MarkingConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the grading process.
    ///
    /// # Returns
    /// * `Ok(MarkingResult)` with the capped mark and rendered feedback.
    /// * `Err(MarkError::InvalidInput)` if the answer or scheme is blank, or
    ///   `marks_available` is zero. No partial grading is attempted.
    ///
    /// # Steps
    /// 1. Validates the inputs.
    /// 2. Lowercases and trims the answer; lowercases the scheme.
    /// 3. Parses the scheme into marking points.
    /// 4. Marks each point matched if any of its keywords is found in the
    ///    answer.
    /// 5. Sums matched marks, capped at `marks_available`.
    /// 6. Assembles feedback from the per-point outcomes.
    ///
    /// A scheme that parses to zero points is not an error: the result is
    /// zero marks with band-only feedback.
    pub fn mark(self) -> Result<MarkingResult, MarkError> {
        if self.answer.trim().is_empty() {
            return Err(MarkError::InvalidInput(
                "userAnswer must not be empty".to_string(),
            ));
        }
        if self.mark_scheme.trim().is_empty() {
            return Err(MarkError::InvalidInput(
                "markScheme must not be empty".to_string(),
            ));
        }
        if self.marks_available == 0 {
            return Err(MarkError::InvalidInput(
                "marksAvailable must be a positive integer".to_string(),
            ));
        }

        let answer = self.answer.trim().to_lowercase();
        let scheme = self.mark_scheme.to_lowercase();

        let points = SchemeParser.parse(scheme.as_str(), self.config.clone())?;
        if points.is_empty() {
            tracing::warn!("mark scheme yielded no scoreable points; awarding zero marks");
        }

        let matcher: Box<dyn KeywordMatcher + 'a> = match self.matcher {
            Some(matcher) => matcher,
            None => Box::new(FuzzyMatcher::from_config(&self.config)),
        };

        let mut results: Vec<PointResult> = Vec::with_capacity(points.len());
        let mut raw_total: u32 = 0;

        for point in &points {
            let matched_keywords: Vec<String> = point
                .keywords
                .iter()
                .filter(|keyword| matcher.matches(&answer, keyword))
                .cloned()
                .collect();
            let matched = !matched_keywords.is_empty();
            if matched {
                raw_total += point.marks;
            }
            results.push(PointResult {
                description: point.description.clone(),
                marks: point.marks,
                matched,
                matched_keywords,
            });
        }

        let marks_awarded = cap_marks(raw_total, self.marks_available);

        tracing::debug!(
            points = points.len(),
            raw_total,
            marks_awarded,
            marks_available = self.marks_available,
            question = self.question.as_deref().unwrap_or(""),
            "marking complete"
        );

        let feedback =
            self.feedback
                .assemble_feedback(&results, marks_awarded, self.marks_available)?;

        Ok(MarkingResult {
            marks_awarded,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAM_ROM_SCHEME: &str =
        "- Explains RAM is volatile memory (1 mark)\n- Explains ROM is non-volatile (1 mark)";

    #[test]
    fn awards_only_the_covered_points() {
        let result = MarkingJob::new(
            "RAM is volatile memory used for temporary storage",
            RAM_ROM_SCHEME,
            2,
        )
        .with_question("Describe the difference between RAM and ROM.")
        .mark()
        .unwrap();

        assert_eq!(result.marks_awarded, 1);
        assert!(
            result
                .feedback
                .contains("✓ explains ram is volatile memory (1 mark)")
        );
        assert!(
            result
                .feedback
                .contains("✗ explains rom is non-volatile (1 mark)")
        );
    }

    #[test]
    fn grading_is_idempotent() {
        let grade = || {
            MarkingJob::new("lossy compression removes data permanently", RAM_ROM_SCHEME, 2).mark()
        };
        assert_eq!(grade().unwrap(), grade().unwrap());
    }

    #[test]
    fn awarded_marks_never_exceed_available() {
        // Three matchable criteria worth 3 in total, but only 2 available.
        let scheme = "- mentions encryption\n- mentions decryption\n- mentions cipher keys";
        let result = MarkingJob::new(
            "encryption and decryption both rely on cipher keys",
            scheme,
            2,
        )
        .mark()
        .unwrap();
        assert_eq!(result.marks_awarded, 2);
    }

    #[test]
    fn cap_applies_to_weighted_points_too() {
        let scheme = "- defines bandwidth (2 marks)\n- defines latency (2 marks)";
        let result = MarkingJob::new("bandwidth and latency both matter", scheme, 3)
            .mark()
            .unwrap();
        assert_eq!(result.marks_awarded, 3);
    }

    #[test]
    fn adding_a_keyword_occurrence_never_lowers_the_mark() {
        let scheme = "- mentions encryption (1 mark)\n- mentions firewalls (1 mark)";
        let before = MarkingJob::new("uses encryption", scheme, 2).mark().unwrap();
        let after = MarkingJob::new("uses encryption and firewalls", scheme, 2)
            .mark()
            .unwrap();
        assert!(after.marks_awarded >= before.marks_awarded);
        assert_eq!(after.marks_awarded, 2);
    }

    #[test]
    fn scheme_without_bullets_grades_to_zero_gracefully() {
        let result = MarkingJob::new(
            "a reasonable answer",
            "Answers will vary; use professional judgement.",
            4,
        )
        .mark()
        .unwrap();

        assert_eq!(result.marks_awarded, 0);
        assert!(result.feedback.starts_with("Score: 0/4 marks"));
        assert!(!result.feedback.contains('✓'));
        assert!(!result.feedback.contains('✗'));
    }

    #[test]
    fn misspelled_answer_still_matches_fuzzily() {
        let scheme = "- mentions photosynthesis (1 mark)";
        let result = MarkingJob::new("the leaf performs photosynthes", scheme, 1)
            .mark()
            .unwrap();
        assert_eq!(result.marks_awarded, 1);
    }

    #[test]
    fn heavily_truncated_keyword_does_not_match() {
        let scheme = "- mentions photosynthesis (1 mark)";
        let result = MarkingJob::new("took a photo of the leaf", scheme, 1)
            .mark()
            .unwrap();
        assert_eq!(result.marks_awarded, 0);
    }

    #[test]
    fn full_marks_render_the_top_band_feedback() {
        let scheme = "- mentions photosynthesis (2 marks)";
        let result = MarkingJob::new("photosynthesis", scheme, 2).mark().unwrap();
        assert_eq!(result.marks_awarded, 2);
        assert_eq!(
            result.feedback,
            "Score: 2/2 marks\n\n\
             Points awarded:\n\
             ✓ mentions photosynthesis (2 marks)\n\n\
             Excellent work! You've covered all key points."
        );
    }

    #[test]
    fn zero_marks_available_is_invalid_input() {
        let err = MarkingJob::new("an answer", RAM_ROM_SCHEME, 0)
            .mark()
            .unwrap_err();
        assert!(matches!(err, MarkError::InvalidInput(_)));
    }

    #[test]
    fn blank_answer_is_invalid_input() {
        let err = MarkingJob::new("   ", RAM_ROM_SCHEME, 2).mark().unwrap_err();
        assert!(matches!(err, MarkError::InvalidInput(_)));
    }

    #[test]
    fn blank_scheme_is_invalid_input() {
        let err = MarkingJob::new("an answer", "\n  \n", 2).mark().unwrap_err();
        assert!(matches!(err, MarkError::InvalidInput(_)));
    }

    #[test]
    fn custom_matcher_strategy_is_honored() {
        struct ExactOnly;
        impl KeywordMatcher for ExactOnly {
            fn matches(&self, answer: &str, keyword: &str) -> bool {
                answer.contains(keyword)
            }
        }

        let scheme = "- mentions photosynthesis (1 mark)";
        let result = MarkingJob::new("the leaf performs photosynthes", scheme, 1)
            .with_matcher(ExactOnly)
            .mark()
            .unwrap();
        assert_eq!(result.marks_awarded, 0);
    }

    #[test]
    fn config_override_reaches_the_default_matcher() {
        let strict = MarkingConfig {
            fuzzy_threshold: 1.0,
            ..MarkingConfig::default_config()
        };
        let scheme = "- mentions photosynthesis (1 mark)";
        let result = MarkingJob::new("the leaf performs photosynthes", scheme, 1)
            .with_config(strict)
            .mark()
            .unwrap();
        assert_eq!(result.marks_awarded, 0);
    }

    #[test]
    fn custom_feedback_strategy_is_honored() {
        struct ScoreOnly;
        impl Feedback for ScoreOnly {
            fn assemble_feedback(
                &self,
                _results: &[PointResult],
                marks_awarded: u32,
                marks_available: u32,
            ) -> Result<String, MarkError> {
                Ok(format!("{marks_awarded}/{marks_available}"))
            }
        }

        let result = MarkingJob::new("ram is volatile memory", RAM_ROM_SCHEME, 2)
            .with_feedback(ScoreOnly)
            .mark()
            .unwrap();
        assert_eq!(result.feedback, "1/2");
    }
}
