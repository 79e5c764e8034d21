//! Explicit in-card phase machines.
//!
//! Cards with multiple reveal steps model them as small tagged unions with
//! a single `advance` transition instead of loose boolean flags. Reaching
//! the end of a phase chain is what completes the card.

use serde::{Deserialize, Serialize};

/// Reveal steps of the introduction card: word first, then the
/// translation, then the example sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroPhase {
    #[default]
    Word,
    Translation,
    Examples,
}

impl IntroPhase {
    /// Next reveal step, or `None` when the card is done.
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::Word => Some(Self::Translation),
            Self::Translation => Some(Self::Examples),
            Self::Examples => None,
        }
    }
}

/// Steps of the speaking card: listen to the word, say it, review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakingPhase {
    #[default]
    Listen,
    Speak,
    Review,
}

impl SpeakingPhase {
    /// Next step, or `None` when the card is done.
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::Listen => Some(Self::Speak),
            Self::Speak => Some(Self::Review),
            Self::Review => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intro_phases_run_in_order() {
        let mut steps = vec![IntroPhase::default()];
        while let Some(next) = steps.last().unwrap().advance() {
            steps.push(next);
        }
        assert_eq!(
            steps,
            vec![IntroPhase::Word, IntroPhase::Translation, IntroPhase::Examples]
        );
    }

    #[test]
    fn speaking_phases_terminate_after_review() {
        assert_eq!(SpeakingPhase::Listen.advance(), Some(SpeakingPhase::Speak));
        assert_eq!(SpeakingPhase::Speak.advance(), Some(SpeakingPhase::Review));
        assert_eq!(SpeakingPhase::Review.advance(), None);
    }
}
