//! Terminal vocabulary practice host.
//!
//! Loads a deck, runs the card flow for each item on stdin/stdout, and
//! prints the aggregated session summary at the end.

mod deck;
mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocab_core::{ListeningMode, PracticeSummary};

use session::SessionConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListeningModeArg {
    /// Pick the heard word from options.
    Quiz,
    /// Type the heard word.
    Type,
}

impl From<ListeningModeArg> for ListeningMode {
    fn from(mode: ListeningModeArg) -> Self {
        match mode {
            ListeningModeArg::Quiz => ListeningMode::Quiz,
            ListeningModeArg::Type => ListeningMode::Type,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vocab-practice", about = "Practice vocabulary cards in the terminal")]
struct Args {
    /// Deck file (JSON array of vocabulary items). Uses the bundled
    /// sample deck when omitted.
    deck: Option<PathBuf>,

    /// Run the full card sequence (adds listening, speaking and typing
    /// cards to the default introduction + audio quiz).
    #[arg(long)]
    all: bool,

    /// Seed for option shuffling; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// How listening cards collect their answer.
    #[arg(long, value_enum, default_value_t = ListeningModeArg::Quiz)]
    listening_mode: ListeningModeArg,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let items = match &args.deck {
        Some(path) => deck::load_deck(path)?,
        None => deck::sample_deck(),
    };
    info!(items = items.len(), "deck loaded");

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let config = SessionConfig {
        include_all: args.all,
        listening_mode: args.listening_mode.into(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut all_results = Vec::new();
    for item in &items {
        let results = session::run_item(item, &items, &config, &mut rng, &mut input, &mut out)?;
        all_results.extend(results);
    }

    print_summary(&all_results, &mut out)?;
    Ok(())
}

fn print_summary(results: &[vocab_core::VocabCardResult], out: &mut impl Write) -> Result<()> {
    let summary = PracticeSummary::from_results(results);
    writeln!(out, "\n--- Session summary ---")?;
    writeln!(
        out,
        "Cards: {}/{} correct ({:.0}%)",
        summary.cards_correct,
        summary.cards_total,
        summary.accuracy() * 100.0
    )?;
    writeln!(out, "Time: {:.1}s", summary.total_time_ms as f64 / 1000.0)?;
    writeln!(
        out,
        "Audio replays: {}, hints used: {}",
        summary.total_audio_replays, summary.hints_used
    )?;
    Ok(())
}
