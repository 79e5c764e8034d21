//! Per-card timing and usage tracking.

use chrono::{DateTime, Utc};

use crate::types::{CardVariant, VocabCardResult};

/// Records engagement signals while a single card is on screen.
///
/// Started fresh whenever the active variant changes; `finish` consumes the
/// tracker and packages a [`VocabCardResult`] for the flow. Timestamps are
/// passed in (the host calls `Utc::now()`) so tests stay deterministic.
#[derive(Debug, Clone)]
pub struct CardTracker {
    variant: CardVariant,
    started_at: DateTime<Utc>,
    audio_replays: u32,
    hint_used: bool,
}

impl CardTracker {
    pub fn start(variant: CardVariant, now: DateTime<Utc>) -> Self {
        Self {
            variant,
            started_at: now,
            audio_replays: 0,
            hint_used: false,
        }
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    /// Count one audio play. Unbounded; repeated taps accumulate.
    pub fn record_audio_play(&mut self) {
        self.audio_replays += 1;
    }

    /// Mark the hint as used. Idempotent.
    pub fn record_hint_used(&mut self) {
        self.hint_used = true;
    }

    pub fn audio_replays(&self) -> u32 {
        self.audio_replays
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Close out the card and build its result.
    pub fn finish(
        self,
        correct: bool,
        user_input: Option<String>,
        now: DateTime<Utc>,
    ) -> VocabCardResult {
        let elapsed = (now - self.started_at).num_milliseconds().max(0) as u64;
        VocabCardResult {
            variant: self.variant,
            correct,
            time_spent_ms: elapsed,
            audio_replays: self.audio_replays,
            hint_used: self.hint_used,
            user_input,
        }
    }
}
