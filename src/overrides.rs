//! Phrase override table: exact symbol sequences with idiomatic sentences.
//!
//! Some sequences read better as a fixed phrase than as a composed one:
//! "👋🙂" should say "Hello friend", not "Wave hello happy". The table keys
//! on the literal concatenated sequence, untokenized and never
//! canonicalized, so reordering the same symbols misses it and falls
//! through to composition. A hit always wins over composition and is
//! returned verbatim, with no formatting applied.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::LexiconError;

/// Default idiomatic phrases shipped with the engine.
const DEFAULTS: &[(&str, &str)] = &[
    ("👋🙂", "Hello friend"),
    ("👋", "Hello"),
    ("🙏💧", "Could I have some water, please?"),
    ("🧑‍🦯🏠", "I want to go home"),
    ("🧑‍🦯😴", "I am tired"),
    ("🆘🚨", "I need help right now"),
    ("📞👨‍👩‍👧", "Please call my family"),
    ("🤕💊", "I have a headache and need medicine"),
    ("🚽🙏", "I need the restroom, please"),
    ("❤️👨‍👩‍👧", "I love my family"),
];

/// Immutable exact-sequence → sentence table.
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

static BUILTIN: OnceLock<OverrideTable> = OnceLock::new();

impl OverrideTable {
    /// The built-in override table.
    pub fn builtin() -> &'static OverrideTable {
        BUILTIN.get_or_init(|| {
            OverrideTable::from_pairs(
                DEFAULTS
                    .iter()
                    .map(|&(seq, sentence)| (seq.to_string(), sentence.to_string())),
            )
        })
    }

    /// Build a table from (sequence, sentence) pairs. A repeated sequence
    /// keeps the last sentence given for it.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Load an override table from a JSON file:
    /// `{ "<sequence>": "<sentence>", ... }`.
    pub fn from_json_file(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&text).map_err(|source| LexiconError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { entries })
    }

    /// Exact, order-sensitive lookup on the raw (untokenized) sequence.
    pub fn lookup(&self, raw_sequence: &str) -> Option<&str> {
        self.entries.get(raw_sequence).map(String::as_str)
    }

    /// Number of override entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (sequence, sentence) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
