//! Flow sequencer for a single vocabulary practice session.
//!
//! A [`CardFlow`] decides which card variant to present next and collects
//! one [`VocabCardResult`] per completed card. It is synchronous and owned
//! by exactly one host; if the host is dropped mid-flow, progress is lost.

use crate::error::{FlowError, Result};
use crate::types::{CardVariant, VocabCardResult, VocabularyItem};

/// The fixed card order used when the host does not supply its own.
///
/// The short form covers quick review; `include_all` adds the remaining
/// production and recall cards.
pub fn default_sequence(include_all: bool) -> Vec<CardVariant> {
    if include_all {
        vec![
            CardVariant::Introduction,
            CardVariant::AudioQuiz,
            CardVariant::Listening,
            CardVariant::Speaking,
            CardVariant::Typing,
        ]
    } else {
        vec![CardVariant::Introduction, CardVariant::AudioQuiz]
    }
}

/// What the flow does after a card completes.
#[derive(Debug, Clone)]
pub enum Advance {
    /// Move on to the next card.
    Continue(CardVariant),
    /// The flow is over; the full ordered result list is handed back.
    Finished(Vec<VocabCardResult>),
}

/// Sequencer state for one vocabulary item.
#[derive(Debug, Clone)]
pub struct CardFlow {
    item: VocabularyItem,
    sequence: Vec<CardVariant>,
    cursor: usize,
    results: Vec<VocabCardResult>,
    finished: bool,
}

impl CardFlow {
    /// Start a flow over the default sequence.
    pub fn new(item: VocabularyItem, include_all: bool) -> Self {
        // default_sequence is never empty
        Self {
            item,
            sequence: default_sequence(include_all),
            cursor: 0,
            results: Vec::new(),
            finished: false,
        }
    }

    /// Start a flow over a host-supplied sequence, used verbatim.
    pub fn with_sequence(item: VocabularyItem, sequence: Vec<CardVariant>) -> Result<Self> {
        if sequence.is_empty() {
            return Err(FlowError::EmptySequence);
        }
        Ok(Self {
            item,
            sequence,
            cursor: 0,
            results: Vec::new(),
            finished: false,
        })
    }

    /// The item being practiced.
    pub fn item(&self) -> &VocabularyItem {
        &self.item
    }

    /// The variant at the cursor, or `None` once the flow has finished.
    pub fn current(&self) -> Option<CardVariant> {
        if self.finished {
            None
        } else {
            self.sequence.get(self.cursor).copied()
        }
    }

    /// Zero-based position of the current card.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total number of cards in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Results collected so far. Drained into [`Advance::Finished`] when
    /// the last card completes.
    pub fn results(&self) -> &[VocabCardResult] {
        &self.results
    }

    pub fn sequence(&self) -> &[CardVariant] {
        &self.sequence
    }

    /// Record the result for the current card and advance.
    ///
    /// On the last card this terminates the flow and hands back the full
    /// result list; any further `complete`/`skip` is [`FlowError::AlreadyFinished`].
    pub fn complete(&mut self, result: VocabCardResult) -> Result<Advance> {
        if self.finished {
            return Err(FlowError::AlreadyFinished);
        }
        self.results.push(result);
        if self.cursor + 1 >= self.sequence.len() {
            self.finished = true;
            Ok(Advance::Finished(std::mem::take(&mut self.results)))
        } else {
            self.cursor += 1;
            Ok(Advance::Continue(self.sequence[self.cursor]))
        }
    }

    /// Complete the current card with a synthesized "not attempted" result.
    pub fn skip(&mut self) -> Result<Advance> {
        let variant = self.current().ok_or(FlowError::AlreadyFinished)?;
        self.complete(VocabCardResult {
            variant,
            correct: false,
            time_spent_ms: 0,
            audio_replays: 0,
            hint_used: false,
            user_input: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item() -> VocabularyItem {
        VocabularyItem {
            id: "w1".into(),
            word: "garden".into(),
            translation: "jardín".into(),
            phonetic: Some("ˈɡɑːdn".into()),
            audio_url: None,
            slow_audio_url: None,
            image_url: None,
            category: "home".into(),
            examples: vec![],
        }
    }

    fn passed(variant: CardVariant) -> VocabCardResult {
        VocabCardResult {
            variant,
            correct: true,
            time_spent_ms: 1000,
            audio_replays: 0,
            hint_used: false,
            user_input: None,
        }
    }

    #[test]
    fn full_default_sequence_starts_with_intro_and_ends_with_typing() {
        let sequence = default_sequence(true);
        assert_eq!(sequence.first(), Some(&CardVariant::Introduction));
        assert_eq!(sequence.last(), Some(&CardVariant::Typing));
        assert_eq!(sequence.len(), 5);
    }

    #[test]
    fn short_default_sequence_is_intro_then_audio_quiz() {
        assert_eq!(
            default_sequence(false),
            vec![CardVariant::Introduction, CardVariant::AudioQuiz]
        );
    }

    #[test]
    fn empty_custom_sequence_is_rejected() {
        assert_eq!(
            CardFlow::with_sequence(item(), vec![]).unwrap_err(),
            FlowError::EmptySequence
        );
    }

    #[test]
    fn custom_sequence_is_used_verbatim() {
        let flow = CardFlow::with_sequence(
            item(),
            vec![CardVariant::Typing, CardVariant::Typing],
        )
        .unwrap();
        assert_eq!(flow.current(), Some(CardVariant::Typing));
        assert_eq!(flow.len(), 2);
    }

    #[test]
    fn completing_every_card_returns_full_result_list() {
        let mut flow = CardFlow::new(item(), true);
        let mut finished = None;
        while let Some(variant) = flow.current() {
            match flow.complete(passed(variant)).unwrap() {
                Advance::Continue(next) => assert_eq!(flow.current(), Some(next)),
                Advance::Finished(results) => finished = Some(results),
            }
        }
        let results = finished.expect("flow should finish");
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].variant, CardVariant::Introduction);
        assert_eq!(results[4].variant, CardVariant::Typing);
        assert!(flow.is_finished());
        assert_eq!(flow.current(), None);
    }

    #[test]
    fn complete_after_finish_is_an_error() {
        let mut flow = CardFlow::new(item(), false);
        flow.complete(passed(CardVariant::Introduction)).unwrap();
        flow.complete(passed(CardVariant::AudioQuiz)).unwrap();
        assert_eq!(
            flow.complete(passed(CardVariant::AudioQuiz)).unwrap_err(),
            FlowError::AlreadyFinished
        );
        assert_eq!(flow.skip().unwrap_err(), FlowError::AlreadyFinished);
    }

    #[test]
    fn skip_synthesizes_a_blank_failed_result() {
        let mut flow = CardFlow::new(item(), true);
        flow.complete(passed(CardVariant::Introduction)).unwrap();
        flow.skip().unwrap();

        let skipped = &flow.results()[1];
        assert_eq!(skipped.variant, CardVariant::AudioQuiz);
        assert!(!skipped.correct);
        assert_eq!(skipped.time_spent_ms, 0);
        assert_eq!(skipped.audio_replays, 0);
        assert!(!skipped.hint_used);
        assert_eq!(skipped.user_input, None);
    }

    #[test]
    fn position_tracks_the_cursor() {
        let mut flow = CardFlow::new(item(), true);
        assert_eq!(flow.position(), 0);
        flow.complete(passed(CardVariant::Introduction)).unwrap();
        assert_eq!(flow.position(), 1);
        flow.skip().unwrap();
        assert_eq!(flow.position(), 2);
    }
}
