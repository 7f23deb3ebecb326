//! Symbol metadata: grammatical roles and glosses for known pictographs.
//!
//! The lexicon is the compositional half of interpretation: each known
//! symbol carries a [`Role`] governing its placement in the composed
//! sentence and a gloss, the natural-language word it translates to.
//! The table is immutable once built and shared freely across threads.
//!
//! Ships with a built-in catalog ([`builtin`]); a custom table can be
//! loaded from a JSON file mapping symbol → `{ role, gloss }`.

pub mod builtin;
pub mod category;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// Grammatical function of a symbol in the composed sentence.
///
/// Closed and mutually exclusive. A symbol without an explicit role in a
/// table file defaults to `Descriptor`: it contributes its gloss with no
/// special positioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Stands for the speaker; the first subject in a phrase becomes "I"
    /// at the front of the sentence.
    Subject,
    /// A verb-like symbol; gloss appended in encounter order.
    Action,
    /// A noun-like symbol; gloss appended in encounter order.
    Object,
    /// Anything else: feelings, responses, qualifiers.
    #[default]
    Descriptor,
}

/// Metadata for one known symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    /// Grammatical role. Absent in table files means `Descriptor`.
    #[serde(default)]
    pub role: Role,
    /// The word or short phrase the symbol maps to. Never empty.
    pub gloss: String,
}

/// Immutable symbol → metadata table.
pub struct Lexicon {
    entries: HashMap<String, SymbolInfo>,
}

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

impl Lexicon {
    /// The built-in catalog of symbols ([`builtin::entries`]).
    pub fn builtin() -> &'static Lexicon {
        BUILTIN.get_or_init(|| {
            Lexicon::from_pairs(
                builtin::entries()
                    .iter()
                    .map(|&(symbol, role, gloss)| (symbol.to_string(), role, gloss.to_string())),
            )
            .expect("built-in lexicon is valid")
        })
    }

    /// Build a lexicon from (symbol, role, gloss) triples, rejecting
    /// duplicate symbols and empty glosses.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, Role, String)>,
    ) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();
        for (symbol, role, gloss) in pairs {
            if gloss.is_empty() {
                return Err(LexiconError::EmptyGloss { symbol });
            }
            if entries
                .insert(symbol.clone(), SymbolInfo { role, gloss })
                .is_some()
            {
                return Err(LexiconError::DuplicateSymbol { symbol });
            }
        }
        Ok(Self { entries })
    }

    /// Load a lexicon from a JSON file:
    /// `{ "<symbol>": { "role": "subject", "gloss": "I" }, ... }`.
    pub fn from_json_file(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let raw: HashMap<String, SymbolInfo> =
            serde_json::from_str(&text).map_err(|source| LexiconError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        // serde_json already deduplicates object keys; only glosses need checking.
        Self::from_pairs(raw.into_iter().map(|(s, info)| (s, info.role, info.gloss)))
    }

    /// Look up the metadata for a single symbol unit. Exact match only.
    pub fn lookup(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.entries.get(symbol)
    }

    /// Number of known symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (symbol, metadata) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolInfo)> {
        self.entries.iter().map(|(s, i)| (s.as_str(), i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_known_symbol() {
        let lex = Lexicon::builtin();
        let apple = lex.lookup("🍎").expect("apple is in the catalog");
        assert_eq!(apple.role, Role::Object);
        assert_eq!(apple.gloss, "apple");
    }

    #[test]
    fn builtin_zwj_symbol_is_one_key() {
        let lex = Lexicon::builtin();
        let doc = lex.lookup("👨‍⚕️").expect("doctor is in the catalog");
        assert_eq!(doc.role, Role::Subject);
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert!(Lexicon::builtin().lookup("🦄").is_none());
    }

    #[test]
    fn lookup_does_not_mutate() {
        let lex = Lexicon::builtin();
        let before = lex.len();
        for _ in 0..3 {
            let _ = lex.lookup("🍎");
            let _ = lex.lookup("🦄");
        }
        assert_eq!(lex.len(), before);
    }

    #[test]
    fn empty_gloss_rejected() {
        let result = Lexicon::from_pairs([("🍎".to_string(), Role::Object, String::new())]);
        assert!(matches!(result, Err(LexiconError::EmptyGloss { .. })));
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let result = Lexicon::from_pairs([
            ("🍎".to_string(), Role::Object, "apple".to_string()),
            ("🍎".to_string(), Role::Object, "fruit".to_string()),
        ]);
        assert!(matches!(result, Err(LexiconError::DuplicateSymbol { .. })));
    }

    #[test]
    fn role_deserializes_lowercase_and_defaults() {
        let info: SymbolInfo = serde_json::from_str(r#"{ "role": "subject", "gloss": "I" }"#)
            .expect("valid entry");
        assert_eq!(info.role, Role::Subject);

        let info: SymbolInfo =
            serde_json::from_str(r#"{ "gloss": "happy" }"#).expect("role is optional");
        assert_eq!(info.role, Role::Descriptor);
    }
}
