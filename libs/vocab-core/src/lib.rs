//! Core vocabulary practice library shared by host applications.
//!
//! Provides:
//! - Flow sequencer that walks a vocabulary item through its practice cards
//! - Answer evaluation (choice index, typo-tolerant typed answers)
//! - Quiz option generation with an injectable RNG
//! - Per-card timing/usage tracking and session result aggregation

pub mod error;
pub mod evaluator;
pub mod flow;
pub mod options;
pub mod phase;
pub mod tracker;
pub mod types;

pub use error::{FlowError, Result};
pub use evaluator::{
    check_selected_option, check_typed_answer, evaluate_response, levenshtein_distance, AnswerKey,
    CardResponse, TypedAnswerCheck, TYPO_TOLERANCE,
};
pub use flow::{default_sequence, Advance, CardFlow};
pub use options::{distractors_from_items, generate_options, QuizOptions};
pub use phase::{IntroPhase, SpeakingPhase};
pub use tracker::CardTracker;
pub use types::{
    CardVariant, ExampleSentence, ListeningMode, PracticeSummary, VocabCardResult, VocabularyItem,
};
