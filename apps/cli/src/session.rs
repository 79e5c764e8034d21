//! Interactive practice session loop.
//!
//! Drives one `CardFlow` per vocabulary item: renders the current card,
//! reads a line, grades it through vocab-core, and feeds the tracker's
//! result back into the flow until it hands the result list over.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use rand::Rng;
use tracing::debug;
use vocab_core::{
    distractors_from_items, evaluate_response, generate_options, Advance, AnswerKey, CardFlow,
    CardResponse, CardTracker, CardVariant, IntroPhase, ListeningMode, QuizOptions, SpeakingPhase,
    VocabCardResult, VocabularyItem,
};

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub include_all: bool,
    pub listening_mode: ListeningMode,
}

/// What the user typed, after command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Text(String),
    Skip,
    Hint,
    Replay,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "/skip" | "/s" => Command::Skip,
        "/hint" | "/h" => Command::Hint,
        "/play" | "/p" => Command::Replay,
        other => Command::Text(other.to_string()),
    }
}

/// Map "1".."=n" to a zero-based option index.
fn parse_choice(text: &str, option_count: usize) -> Option<usize> {
    let n: usize = text.trim().parse().ok()?;
    if (1..=option_count).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

/// Read the next command; end of input counts as a skip so piped
/// sessions terminate cleanly.
fn read_command<I: BufRead>(input: &mut I) -> Result<Command> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("reading input")?;
    if bytes == 0 {
        return Ok(Command::Skip);
    }
    Ok(parse_command(&line))
}

enum CardOutcome {
    Skipped,
    Answered {
        correct: bool,
        user_input: Option<String>,
    },
}

/// Run the full card flow for one item and return its results.
pub fn run_item<R, I, W>(
    item: &VocabularyItem,
    deck: &[VocabularyItem],
    config: &SessionConfig,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<Vec<VocabCardResult>>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut flow = CardFlow::new(item.clone(), config.include_all);
    writeln!(out, "\n=== {} ({} cards) ===", item.word, flow.len())?;

    let results = loop {
        let variant = flow.current().context("flow yielded no card")?;
        debug!(variant = variant.as_str(), position = flow.position(), "presenting card");

        let mut tracker = CardTracker::start(variant, Utc::now());
        let outcome = present_card(variant, item, deck, config, rng, &mut tracker, input, out)?;

        let advance = match outcome {
            CardOutcome::Skipped => {
                writeln!(out, "(skipped)")?;
                flow.skip()?
            }
            CardOutcome::Answered { correct, user_input } => {
                flow.complete(tracker.finish(correct, user_input, Utc::now()))?
            }
        };

        if let Advance::Finished(results) = advance {
            break results;
        }
    };

    Ok(results)
}

#[allow(clippy::too_many_arguments)]
fn present_card<R, I, W>(
    variant: CardVariant,
    item: &VocabularyItem,
    deck: &[VocabularyItem],
    config: &SessionConfig,
    rng: &mut R,
    tracker: &mut CardTracker,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    match variant {
        CardVariant::Introduction => run_introduction(item, input, out),
        CardVariant::AudioQuiz => {
            // hear the word, pick its translation
            let pool = distractors_from_items(deck, &item.id, true);
            let options = generate_options(&item.translation, &pool, rng);
            run_quiz(variant, item, &options, tracker, input, out)
        }
        CardVariant::Listening => match config.listening_mode {
            ListeningMode::Quiz => {
                // hear the word, pick it out of similar words
                let pool = distractors_from_items(deck, &item.id, false);
                let options = generate_options(&item.word, &pool, rng);
                run_quiz(variant, item, &options, tracker, input, out)
            }
            ListeningMode::Type => run_transcription(item, tracker, input, out),
        },
        CardVariant::Speaking => run_speaking(item, tracker, input, out),
        CardVariant::Typing => run_typing(item, tracker, input, out),
    }
}

fn run_introduction<I: BufRead, W: Write>(
    item: &VocabularyItem,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome> {
    let mut phase = Some(IntroPhase::default());
    while let Some(current) = phase {
        match current {
            IntroPhase::Word => {
                write!(out, "New word: {}", item.word)?;
                if let Some(phonetic) = &item.phonetic {
                    write!(out, " /{phonetic}/")?;
                }
                writeln!(out, "  [{}]", item.category)?;
            }
            IntroPhase::Translation => {
                writeln!(out, "Translation: {}", item.translation)?;
            }
            IntroPhase::Examples => {
                for example in &item.examples {
                    writeln!(out, "  {}", example.original)?;
                    writeln!(out, "  {}", example.translation)?;
                }
            }
        }
        writeln!(out, "[enter] to continue, /skip to skip")?;
        if read_command(input)? == Command::Skip {
            return Ok(CardOutcome::Skipped);
        }
        phase = current.advance();
    }

    let correct =
        evaluate_response(CardVariant::Introduction, &CardResponse::Completion, &AnswerKey::None);
    Ok(CardOutcome::Answered {
        correct,
        user_input: None,
    })
}

fn run_quiz<I: BufRead, W: Write>(
    variant: CardVariant,
    item: &VocabularyItem,
    options: &QuizOptions,
    tracker: &mut CardTracker,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome> {
    writeln!(out, "[audio] \"{}\"  (/play to hear it again)", item.word)?;
    for (index, choice) in options.choices.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, choice)?;
    }

    loop {
        writeln!(out, "Pick 1-{} (/hint, /skip):", options.choices.len())?;
        match read_command(input)? {
            Command::Skip => return Ok(CardOutcome::Skipped),
            Command::Replay => {
                tracker.record_audio_play();
                writeln!(out, "[audio] \"{}\"", item.word)?;
            }
            Command::Hint => {
                tracker.record_hint_used();
                let first = options.correct_answer().chars().next().unwrap_or(' ');
                writeln!(out, "Hint: it starts with \"{first}\"")?;
            }
            Command::Text(text) => {
                let Some(selected) = parse_choice(&text, options.choices.len()) else {
                    writeln!(out, "Not an option.")?;
                    continue;
                };
                let correct = evaluate_response(
                    variant,
                    &CardResponse::Selection(selected),
                    &AnswerKey::CorrectIndex(options.correct_index),
                );
                if correct {
                    writeln!(out, "Correct!")?;
                } else {
                    writeln!(out, "Incorrect, the answer was \"{}\"", options.correct_answer())?;
                }
                return Ok(CardOutcome::Answered {
                    correct,
                    user_input: Some(options.choices[selected].clone()),
                });
            }
        }
    }
}

fn run_transcription<I: BufRead, W: Write>(
    item: &VocabularyItem,
    tracker: &mut CardTracker,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome> {
    writeln!(out, "[audio] \"{}\"  (/play to hear it again)", item.word)?;
    prompt_typed(
        CardVariant::Listening,
        "Type the word you heard",
        &item.word,
        tracker,
        input,
        out,
    )
}

fn run_typing<I: BufRead, W: Write>(
    item: &VocabularyItem,
    tracker: &mut CardTracker,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome> {
    writeln!(out, "Translation: {}", item.translation)?;
    prompt_typed(
        CardVariant::Typing,
        "Type the word",
        &item.word,
        tracker,
        input,
        out,
    )
}

fn prompt_typed<I: BufRead, W: Write>(
    variant: CardVariant,
    prompt: &str,
    expected: &str,
    tracker: &mut CardTracker,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome> {
    loop {
        writeln!(out, "{prompt} (/hint, /play, /skip):")?;
        match read_command(input)? {
            Command::Skip => return Ok(CardOutcome::Skipped),
            Command::Replay => {
                tracker.record_audio_play();
                writeln!(out, "[audio] \"{expected}\"")?;
            }
            Command::Hint => {
                tracker.record_hint_used();
                let first = expected.chars().next().unwrap_or(' ');
                writeln!(out, "Hint: it starts with \"{first}\"")?;
            }
            Command::Text(text) => {
                let correct = evaluate_response(
                    variant,
                    &CardResponse::FreeText(text.clone()),
                    &AnswerKey::TargetText(expected.to_string()),
                );
                if correct {
                    writeln!(out, "Correct!")?;
                } else {
                    writeln!(out, "Incorrect, the answer was \"{expected}\"")?;
                }
                return Ok(CardOutcome::Answered {
                    correct,
                    user_input: Some(text),
                });
            }
        }
    }
}

fn run_speaking<I: BufRead, W: Write>(
    item: &VocabularyItem,
    tracker: &mut CardTracker,
    input: &mut I,
    out: &mut W,
) -> Result<CardOutcome> {
    let mut phase = Some(SpeakingPhase::default());
    while let Some(current) = phase {
        match current {
            SpeakingPhase::Listen => {
                writeln!(out, "[audio] \"{}\"  (/play to hear it again)", item.word)?;
            }
            SpeakingPhase::Speak => {
                writeln!(out, "Say \"{}\" out loud.", item.word)?;
            }
            SpeakingPhase::Review => {
                writeln!(out, "{} = {}", item.word, item.translation)?;
            }
        }
        loop {
            writeln!(out, "[enter] to continue, /skip to skip")?;
            match read_command(input)? {
                Command::Skip => return Ok(CardOutcome::Skipped),
                Command::Replay => {
                    tracker.record_audio_play();
                    writeln!(out, "[audio] \"{}\"", item.word)?;
                }
                _ => break,
            }
        }
        phase = current.advance();
    }

    let correct =
        evaluate_response(CardVariant::Speaking, &CardResponse::Completion, &AnswerKey::None);
    Ok(CardOutcome::Answered {
        correct,
        user_input: None,
    })
}
