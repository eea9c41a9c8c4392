//! # AutoFeedback Strategy
//!
//! Template-based feedback: a score header, the matched and missed criteria
//! as ✓/✗ lines, then a single closing sentence chosen by performance band.
//!
//! The exact wording here is load-bearing: the rendered text is what the
//! student sees and what existing consumers of the service display verbatim.

use crate::error::MarkError;
use crate::scorer::{PerformanceBand, percentage};
use crate::traits::feedback::Feedback;
use crate::types::PointResult;

/// Automatic feedback strategy.
#[derive(Debug)]
pub struct AutoFeedback;

fn point_line(symbol: char, result: &PointResult) -> String {
    let unit = if result.marks == 1 { "mark" } else { "marks" };
    format!("{symbol} {} ({} {unit})", result.description, result.marks)
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        results: &[PointResult],
        marks_awarded: u32,
        marks_available: u32,
    ) -> Result<String, MarkError> {
        let mut feedback = format!("Score: {marks_awarded}/{marks_available} marks\n\n");

        let awarded: Vec<String> = results
            .iter()
            .filter(|r| r.matched)
            .map(|r| point_line('✓', r))
            .collect();
        if !awarded.is_empty() {
            feedback.push_str("Points awarded:\n");
            feedback.push_str(&awarded.join("\n"));
            feedback.push_str("\n\n");
        }

        let missed: Vec<String> = results
            .iter()
            .filter(|r| !r.matched)
            .map(|r| point_line('✗', r))
            .collect();
        if !missed.is_empty() {
            feedback.push_str("Points to improve:\n");
            feedback.push_str(&missed.join("\n"));
            feedback.push_str("\n\n");
        }

        let band = PerformanceBand::from_percentage(percentage(marks_awarded, marks_available));
        feedback.push_str(band.comment());

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(description: &str, marks: u32, matched: bool) -> PointResult {
        PointResult {
            description: description.to_string(),
            marks,
            matched,
            matched_keywords: if matched {
                vec!["keyword".to_string()]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn renders_full_marks_feedback() {
        let results = vec![point("explains caching", 2, true)];
        let feedback = AutoFeedback.assemble_feedback(&results, 2, 2).unwrap();
        assert_eq!(
            feedback,
            "Score: 2/2 marks\n\n\
             Points awarded:\n\
             ✓ explains caching (2 marks)\n\n\
             Excellent work! You've covered all key points."
        );
    }

    #[test]
    fn renders_mixed_feedback_with_both_blocks() {
        let results = vec![
            point("explains caching", 1, true),
            point("names the cpu register", 1, false),
        ];
        let feedback = AutoFeedback.assemble_feedback(&results, 1, 2).unwrap();
        assert!(feedback.starts_with("Score: 1/2 marks\n\n"));
        assert!(feedback.contains("Points awarded:\n✓ explains caching (1 mark)"));
        assert!(feedback.contains("Points to improve:\n✗ names the cpu register (1 mark)"));
        assert!(feedback.ends_with(PerformanceBand::Developing.comment()));
    }

    #[test]
    fn omits_awarded_block_when_nothing_matched() {
        let results = vec![point("defines recursion", 1, false)];
        let feedback = AutoFeedback.assemble_feedback(&results, 0, 2).unwrap();
        assert!(!feedback.contains("Points awarded:"));
        assert!(feedback.contains("Points to improve:"));
        assert!(feedback.ends_with(PerformanceBand::Limited.comment()));
    }

    #[test]
    fn no_points_at_all_renders_header_and_band_only() {
        let feedback = AutoFeedback.assemble_feedback(&[], 0, 3).unwrap();
        assert_eq!(
            feedback,
            format!("Score: 0/3 marks\n\n{}", PerformanceBand::Limited.comment())
        );
    }

    #[test]
    fn pluralizes_mark_counts() {
        let results = vec![point("single", 1, true), point("plural", 3, true)];
        let feedback = AutoFeedback.assemble_feedback(&results, 4, 4).unwrap();
        assert!(feedback.contains("✓ single (1 mark)"));
        assert!(feedback.contains("✓ plural (3 marks)"));
    }
}
