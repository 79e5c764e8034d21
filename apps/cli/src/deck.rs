//! Deck loading for the practice CLI.
//!
//! A deck is a JSON array of vocabulary items. A small bundled deck is
//! used when no file is given so the binary is runnable out of the box.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use vocab_core::{ExampleSentence, VocabularyItem};

/// Load a deck from a JSON file.
pub fn load_deck(path: &Path) -> Result<Vec<VocabularyItem>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading deck file {}", path.display()))?;
    let items: Vec<VocabularyItem> = serde_json::from_str(&content)
        .with_context(|| format!("parsing deck file {}", path.display()))?;
    ensure!(!items.is_empty(), "deck file {} contains no items", path.display());
    Ok(items)
}

/// Bundled English/Spanish starter deck.
pub fn sample_deck() -> Vec<VocabularyItem> {
    let entries: [(&str, &str, &str, &str, &str); 4] = [
        (
            "sample-1",
            "garden",
            "jardín",
            "ˈɡɑːdn",
            "home",
        ),
        (
            "sample-2",
            "window",
            "ventana",
            "ˈwɪndəʊ",
            "home",
        ),
        (
            "sample-3",
            "apple",
            "manzana",
            "ˈæpl",
            "food",
        ),
        (
            "sample-4",
            "picture",
            "cuadro",
            "ˈpɪktʃə",
            "home",
        ),
    ];

    entries
        .iter()
        .map(|(id, word, translation, phonetic, category)| VocabularyItem {
            id: (*id).to_string(),
            word: (*word).to_string(),
            translation: (*translation).to_string(),
            phonetic: Some((*phonetic).to_string()),
            audio_url: None,
            slow_audio_url: None,
            image_url: None,
            category: (*category).to_string(),
            examples: vec![ExampleSentence {
                original: format!("This is a {word}."),
                translation: format!("Esto es un {translation}."),
            }],
        })
        .collect()
}
