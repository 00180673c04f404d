// ============================================================
// Layer 5 — Overlap Scorer
// ============================================================
// Word-overlap metrics between a predicted and a correct answer.
//
// Words come from splitting on a single space ' ', case-sensitive.
// Empty tokens from doubled or leading spaces are kept.
// The empty string has zero words.
//
// "Word found in text" means substring containment on the raw
// text, not token-set membership: the word "a" is found in
// "Bobby ate", because "ate" contains an 'a'.
//
// Example:
//   predicted = "Bobby eats a sandwich"   correct = "Bobby"
//   over_correct   = 1 of 1 correct words in predicted   = 1.0
//   over_predicted = 1 of 4 predicted words in correct   = 0.25
//   average        = (1.0 + 0.25) / 2                     = 0.625
//
// A zero-word operand is BaselineError::DegenerateInput; no
// ratio here ever divides by zero.

use serde::{Deserialize, Serialize};

use crate::domain::error::{BaselineError, Operand};

/// The space-separated words of `text`; none for the empty string.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    (!text.is_empty())
        .then(|| text.split(' '))
        .into_iter()
        .flatten()
}

pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Count the words of `candidate` that occur as substrings of `reference`.
pub fn count_common_words(reference: &str, candidate: &str) -> usize {
    words(candidate)
        .filter(|word| reference.contains(*word))
        .count()
}

/// Fraction of the correct answer's words found in the prediction.
pub fn score_over_correct(predicted: &str, correct: &str) -> Result<f64, BaselineError> {
    ratio(
        count_common_words(predicted, correct),
        word_count(correct),
        Operand::Correct,
    )
}

/// Fraction of the prediction's words found in the correct answer.
pub fn score_over_predicted(predicted: &str, correct: &str) -> Result<f64, BaselineError> {
    ratio(
        count_common_words(correct, predicted),
        word_count(predicted),
        Operand::Predicted,
    )
}

/// Mean of `score_over_correct` and `score_over_predicted`.
pub fn score_average(predicted: &str, correct: &str) -> Result<f64, BaselineError> {
    let over_correct   = score_over_correct(predicted, correct)?;
    let over_predicted = score_over_predicted(predicted, correct)?;
    Ok((over_correct + over_predicted) / 2.0)
}

fn ratio(common: usize, total: usize, operand: Operand) -> Result<f64, BaselineError> {
    if total == 0 {
        return Err(BaselineError::DegenerateInput { operand, record: None });
    }
    Ok(common as f64 / total as f64)
}

/// All three overlap metrics for one prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapScores {
    pub over_correct:   f64,
    pub over_predicted: f64,
    pub average:        f64,
}

impl OverlapScores {
    /// The score a degenerate record receives under the zero policy
    pub const ZERO: OverlapScores = OverlapScores {
        over_correct:   0.0,
        over_predicted: 0.0,
        average:        0.0,
    };

    pub fn compute(predicted: &str, correct: &str) -> Result<Self, BaselineError> {
        let over_correct   = score_over_correct(predicted, correct)?;
        let over_predicted = score_over_predicted(predicted, correct)?;
        Ok(Self {
            over_correct,
            over_predicted,
            average: (over_correct + over_predicted) / 2.0,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_asymmetric_ratios() {
        let s = OverlapScores::compute("Bobby eats a sandwich", "Bobby").unwrap();
        assert!(close(s.over_correct, 1.0));
        assert!(close(s.over_predicted, 0.25));
        assert!(close(s.average, 0.625));
    }

    #[test]
    fn test_substring_containment_not_token_match() {
        // "a" is inside "sandwich", "ate" is inside "later"
        assert_eq!(count_common_words("a sandwich later", "ate a"), 2);
        assert_eq!(count_common_words("Bobby", "bobby"), 0, "case-sensitive");
    }

    #[test]
    fn test_empty_tokens_are_kept() {
        // leading space gives ["", "quickly"]; "" is contained in anything
        assert_eq!(word_count(" quickly"), 2);
        assert_eq!(count_common_words("who ?", " quickly"), 1);
    }

    #[test]
    fn test_empty_string_has_no_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(count_common_words("anything", ""), 0);
    }

    #[test]
    fn test_empty_prediction_is_degenerate() {
        let err = score_over_predicted("", "Bobby").unwrap_err();
        assert_eq!(
            err,
            BaselineError::DegenerateInput { operand: Operand::Predicted, record: None }
        );
        // The correct-side ratio is still well defined
        assert!(close(score_over_correct("", "Bobby").unwrap(), 0.0));
    }

    #[test]
    fn test_empty_correct_answer_is_degenerate() {
        let err = OverlapScores::compute("Bobby", "").unwrap_err();
        assert_eq!(
            err,
            BaselineError::DegenerateInput { operand: Operand::Correct, record: None }
        );
    }

    #[test]
    fn test_compute_average_matches_score_average() {
        let s = OverlapScores::compute("a sandwich later", "ate a sandwich").unwrap();
        assert!(close(s.average, score_average("a sandwich later", "ate a sandwich").unwrap()));
        assert!(close(s.average, (s.over_correct + s.over_predicted) / 2.0));
    }

    #[test]
    fn test_identical_answers_score_one() {
        let s = OverlapScores::compute("the blue sky", "the blue sky").unwrap();
        assert_eq!(s, OverlapScores { over_correct: 1.0, over_predicted: 1.0, average: 1.0 });
    }
}
