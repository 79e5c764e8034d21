//! Option generation for choice-based quiz cards.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::VocabularyItem;

/// How many distractors a full option list carries alongside the answer.
const DISTRACTOR_COUNT: usize = 3;

/// A generated option list with its answer position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOptions {
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl QuizOptions {
    pub fn correct_answer(&self) -> &str {
        &self.choices[self.correct_index]
    }
}

/// Build the option list for a quiz card.
///
/// Distractors equal to the answer (case-insensitively) are dropped, the
/// rest shuffled, the first three kept, and the answer spliced into a
/// uniformly random slot. If fewer than three distractors survive the
/// filter, the list is simply shorter; callers must tolerate that.
///
/// The RNG is injected so hosts can seed it for deterministic tests.
pub fn generate_options<R: Rng + ?Sized>(
    correct: &str,
    distractor_pool: &[String],
    rng: &mut R,
) -> QuizOptions {
    let correct_lower = correct.to_lowercase();
    let mut distractors: Vec<String> = distractor_pool
        .iter()
        .filter(|candidate| candidate.to_lowercase() != correct_lower)
        .cloned()
        .collect();

    distractors.shuffle(rng);
    distractors.truncate(DISTRACTOR_COUNT);

    let correct_index = rng.random_range(0..=distractors.len());
    let mut choices = distractors;
    choices.insert(correct_index, correct.to_string());

    QuizOptions {
        choices,
        correct_index,
    }
}

/// Distractor pool drawn from the other items in a deck.
///
/// Quiz cards that ask for the word pull words; cards that ask for the
/// translation pull translations.
pub fn distractors_from_items(
    items: &[VocabularyItem],
    exclude_id: &str,
    use_translation: bool,
) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.id != exclude_id)
        .map(|item| {
            if use_translation {
                item.translation.clone()
            } else {
                item.word.clone()
            }
        })
        .collect()
}
