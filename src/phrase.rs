//! Phrase buffer: the in-progress symbol sequence being edited.
//!
//! Backs the editing panel: symbols are appended as the user picks them,
//! and backspace removes the last user-perceived symbol, never half a ZWJ
//! sequence. Purely local state; interpretation always runs on the full
//! raw sequence.

use crate::token;

/// An editable symbol sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseBuffer {
    raw: String,
}

impl PhraseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw sequence (e.g. a recalled favorite).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Append a picked symbol to the end of the phrase.
    pub fn push_symbol(&mut self, symbol: &str) {
        self.raw.push_str(symbol);
    }

    /// Remove the last user-perceived symbol. No-op on an empty phrase.
    pub fn backspace(&mut self) {
        let cut = match token::tokenize(&self.raw).last() {
            Some(last) => self.raw.len() - last.len(),
            None => return,
        };
        self.raw.truncate(cut);
    }

    /// Clear the whole phrase.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The raw sequence as composed so far.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of symbol units in the phrase.
    pub fn symbol_count(&self) -> usize {
        token::tokenize(&self.raw).len()
    }
}
