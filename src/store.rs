//! Phrase store: favorites and speech history as raw symbol sequences.
//!
//! Stores RAW sequences, never interpreted sentences; interpretation runs
//! fresh whenever a stored phrase is spoken again, so table updates apply
//! retroactively. History keeps the most recent 20 phrases with
//! speak-again moving a phrase back to the front; favorites keep up to 50
//! with duplicates rejected. Round-trips to a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Most recent phrases kept in history.
pub const HISTORY_CAP: usize = 20;

/// Maximum number of saved favorites.
pub const FAVORITES_CAP: usize = 50;

/// Saved phrases, newest first in both lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhraseStore {
    #[serde(default)]
    favorites: Vec<String>,
    #[serde(default)]
    history: Vec<String>,
}

impl PhraseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the store back to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Record a spoken phrase at the front of history; speaking a phrase
    /// already present moves it to the front instead of duplicating it.
    /// Empty phrases are not recorded.
    pub fn record(&mut self, raw_sequence: &str) {
        if raw_sequence.is_empty() {
            return;
        }
        self.history.retain(|h| h != raw_sequence);
        self.history.insert(0, raw_sequence.to_string());
        self.history.truncate(HISTORY_CAP);
    }

    /// Save a phrase to the front of favorites. Returns `false` if the
    /// phrase was already saved (or empty); the list is unchanged then.
    pub fn add_favorite(&mut self, raw_sequence: &str) -> bool {
        if raw_sequence.is_empty() || self.favorites.iter().any(|f| f == raw_sequence) {
            return false;
        }
        self.favorites.insert(0, raw_sequence.to_string());
        self.favorites.truncate(FAVORITES_CAP);
        true
    }

    /// Remove the favorite at `index` (zero-based, newest first).
    pub fn remove_favorite(&mut self, index: usize) -> Result<String, StoreError> {
        if index >= self.favorites.len() {
            return Err(StoreError::BadIndex {
                index,
                len: self.favorites.len(),
            });
        }
        Ok(self.favorites.remove(index))
    }

    /// Saved favorites, newest first.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Speech history, newest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}
