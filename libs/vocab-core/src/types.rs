//! Core types for the vocabulary practice flow.

use serde::{Deserialize, Serialize};

/// A word or phrase to practice.
///
/// Supplied by the host (bundled content, remote fetch, or generated) and
/// read-only for the duration of a practice flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: String,
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
}

/// An example sentence shown on the introduction card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub original: String,
    pub translation: String,
}

/// Which practice card is being shown.
///
/// Purely a selector for the presentation and evaluation rule; carries no
/// state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    Introduction,
    AudioQuiz,
    Listening,
    Speaking,
    Typing,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::AudioQuiz => "audio_quiz",
            Self::Listening => "listening",
            Self::Speaking => "speaking",
            Self::Typing => "typing",
        }
    }
}

/// How a listening card collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListeningMode {
    /// Pick the heard word from a generated option list.
    Quiz,
    /// Type the heard word.
    Type,
}

impl Default for ListeningMode {
    fn default() -> Self {
        Self::Quiz
    }
}

/// Outcome of a single completed card.
///
/// Appended to the flow's result list on completion and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabCardResult {
    pub variant: CardVariant,
    pub correct: bool,
    pub time_spent_ms: u64,
    pub audio_replays: u32,
    pub hint_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
}

/// Aggregate view over a finished flow's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSummary {
    pub cards_total: usize,
    pub cards_correct: usize,
    pub total_time_ms: u64,
    pub total_audio_replays: u32,
    pub hints_used: usize,
}

impl PracticeSummary {
    /// Fold a result list into per-session totals.
    pub fn from_results(results: &[VocabCardResult]) -> Self {
        let mut summary = Self {
            cards_total: results.len(),
            cards_correct: 0,
            total_time_ms: 0,
            total_audio_replays: 0,
            hints_used: 0,
        };
        for result in results {
            if result.correct {
                summary.cards_correct += 1;
            }
            summary.total_time_ms += result.time_spent_ms;
            summary.total_audio_replays += result.audio_replays;
            if result.hint_used {
                summary.hints_used += 1;
            }
        }
        summary
    }

    /// Fraction of cards answered correctly, 0.0 for an empty session.
    pub fn accuracy(&self) -> f64 {
        if self.cards_total == 0 {
            return 0.0;
        }
        self.cards_correct as f64 / self.cards_total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(variant: CardVariant, correct: bool, time: u64) -> VocabCardResult {
        VocabCardResult {
            variant,
            correct,
            time_spent_ms: time,
            audio_replays: 1,
            hint_used: correct,
            user_input: None,
        }
    }

    #[test]
    fn summary_folds_results() {
        let results = vec![
            result(CardVariant::Introduction, true, 1200),
            result(CardVariant::AudioQuiz, false, 4000),
            result(CardVariant::Typing, true, 8500),
        ];
        let summary = PracticeSummary::from_results(&results);
        assert_eq!(summary.cards_total, 3);
        assert_eq!(summary.cards_correct, 2);
        assert_eq!(summary.total_time_ms, 13700);
        assert_eq!(summary.total_audio_replays, 3);
        assert_eq!(summary.hints_used, 2);
    }

    #[test]
    fn accuracy_of_empty_session_is_zero() {
        let summary = PracticeSummary::from_results(&[]);
        assert_eq!(summary.accuracy(), 0.0);
    }
}
