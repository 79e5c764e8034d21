//! Answer evaluation for practice cards.
//!
//! Choice cards compare the selected index against the precomputed correct
//! index. Free-text cards normalize (trim + lowercase) and accept an edit
//! distance of at most [`TYPO_TOLERANCE`]. Introduction and speaking cards
//! are exposure exercises; completing them is the success signal.

use serde::{Deserialize, Serialize};

use crate::types::CardVariant;

/// Maximum Levenshtein distance still counted as correct for typed answers.
///
/// Binary typo tolerance, not a similarity ranking: one insertion, deletion,
/// or substitution passes, two edits fail regardless of word length.
pub const TYPO_TOLERANCE: usize = 1;

/// What the user did on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardResponse {
    /// Picked an option by index.
    Selection(usize),
    /// Typed an answer.
    FreeText(String),
    /// Finished a card with nothing to grade.
    Completion,
}

/// What a response is graded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// Index of the correct option, fixed when the options were generated.
    CorrectIndex(usize),
    /// Target text for typed answers.
    TargetText(String),
    /// Nothing gradable (introduction, speaking).
    None,
}

/// Outcome of grading a typed answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedAnswerCheck {
    pub is_correct: bool,
    pub distance: usize,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected answer (for display).
    pub expected_normalized: String,
}

/// Grade a typed answer against the expected word.
pub fn check_typed_answer(typed: &str, expected: &str) -> TypedAnswerCheck {
    let typed_normalized = typed.trim().to_lowercase();
    let expected_normalized = expected.trim().to_lowercase();
    let distance = levenshtein_distance(&typed_normalized, &expected_normalized);
    TypedAnswerCheck {
        is_correct: distance <= TYPO_TOLERANCE,
        distance,
        typed_normalized,
        expected_normalized,
    }
}

/// Grade a choice answer: correct iff the selected index matches.
pub fn check_selected_option(selected: usize, correct_index: usize) -> bool {
    selected == correct_index
}

/// Apply the per-variant correctness rule.
///
/// A response whose shape does not match the key (a selection graded
/// against target text, or vice versa) is incorrect.
pub fn evaluate_response(variant: CardVariant, response: &CardResponse, key: &AnswerKey) -> bool {
    match variant {
        CardVariant::Introduction | CardVariant::Speaking => true,
        CardVariant::AudioQuiz => match (response, key) {
            (CardResponse::Selection(selected), AnswerKey::CorrectIndex(correct)) => {
                check_selected_option(*selected, *correct)
            }
            _ => false,
        },
        CardVariant::Listening => match (response, key) {
            (CardResponse::Selection(selected), AnswerKey::CorrectIndex(correct)) => {
                check_selected_option(*selected, *correct)
            }
            (CardResponse::FreeText(typed), AnswerKey::TargetText(expected)) => {
                check_typed_answer(typed, expected).is_correct
            }
            _ => false,
        },
        CardVariant::Typing => match (response, key) {
            (CardResponse::FreeText(typed), AnswerKey::TargetText(expected)) => {
                check_typed_answer(typed, expected).is_correct
            }
            _ => false,
        },
    }
}

/// Levenshtein edit distance over characters.
///
/// Full dynamic-programming table, no banding or early exit; inputs are
/// single words so the quadratic cost is irrelevant.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = a_chars.len();
    let m = b_chars.len();

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..=m {
        for j in 1..=n {
            matrix[i][j] = if b_chars[i - 1] == a_chars[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j])
            };
        }
    }

    matrix[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("garden", "garden"), 0);
        assert_eq!(levenshtein_distance("garden", ""), 6);
        assert_eq!(levenshtein_distance("", "garden"), 6);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("aple", "apple"), 1);
        assert_eq!(levenshtein_distance("aplee", "apple"), 2);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ("garden", "gardn"),
            ("jardín", "jardin"),
            ("kitten", "sitting"),
            ("", "word"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn exact_match_after_normalization_is_correct() {
        let check = check_typed_answer("  Garden ", "garden");
        assert!(check.is_correct);
        assert_eq!(check.distance, 0);
        assert_eq!(check.typed_normalized, "garden");
    }

    #[test]
    fn single_typo_is_tolerated() {
        assert!(check_typed_answer("gardn", "garden").is_correct);
        assert!(check_typed_answer("gardenn", "garden").is_correct);
        assert!(check_typed_answer("warden", "garden").is_correct);
    }

    #[test]
    fn two_edits_fail() {
        let check = check_typed_answer("aplee", "apple");
        assert_eq!(check.distance, 2);
        assert!(!check.is_correct);
    }

    #[test]
    fn accent_mismatch_counts_as_one_edit() {
        // "jardin" vs "jardín" is a single substitution
        assert!(check_typed_answer("jardin", "jardín").is_correct);
    }

    #[test]
    fn translation_typed_in_word_mode_fails() {
        let check = check_typed_answer("jardin", "garden");
        assert!(check.distance >= 2);
        assert!(!check.is_correct);
    }

    #[test]
    fn choice_grading_by_index() {
        assert!(check_selected_option(1, 1));
        assert!(!check_selected_option(0, 1));
    }

    #[test]
    fn exposure_variants_are_always_correct() {
        assert!(evaluate_response(
            CardVariant::Introduction,
            &CardResponse::Completion,
            &AnswerKey::None
        ));
        assert!(evaluate_response(
            CardVariant::Speaking,
            &CardResponse::Completion,
            &AnswerKey::None
        ));
    }

    #[test]
    fn listening_grades_by_mode_of_the_key() {
        let quiz_key = AnswerKey::CorrectIndex(2);
        assert!(evaluate_response(
            CardVariant::Listening,
            &CardResponse::Selection(2),
            &quiz_key
        ));
        assert!(!evaluate_response(
            CardVariant::Listening,
            &CardResponse::Selection(0),
            &quiz_key
        ));

        let type_key = AnswerKey::TargetText("garden".into());
        assert!(evaluate_response(
            CardVariant::Listening,
            &CardResponse::FreeText("gardn".into()),
            &type_key
        ));
    }

    #[test]
    fn mismatched_response_shape_is_incorrect() {
        assert!(!evaluate_response(
            CardVariant::Typing,
            &CardResponse::Selection(0),
            &AnswerKey::TargetText("garden".into())
        ));
        assert!(!evaluate_response(
            CardVariant::AudioQuiz,
            &CardResponse::FreeText("garden".into()),
            &AnswerKey::CorrectIndex(0)
        ));
    }
}
