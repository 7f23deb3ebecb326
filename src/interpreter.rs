//! Interpreter facade: owns the two tables and exposes the public API.
//!
//! Tables are built once (built-in or loaded from JSON files) and are
//! read-only for the lifetime of the process, so an [`Interpreter`] can be
//! shared across threads behind an `Arc` without locking. Interpretation
//! keeps no state between calls.

use std::path::PathBuf;
use std::sync::Arc;

use crate::compose;
use crate::error::PictoResult;
use crate::lexicon::{Lexicon, SymbolInfo};
use crate::overrides::OverrideTable;
use crate::token;

/// Configuration for the interpreter.
#[derive(Debug, Clone, Default)]
pub struct InterpreterConfig {
    /// Path to a JSON lexicon replacing the built-in catalog. `None` for built-in.
    pub lexicon_path: Option<PathBuf>,
    /// Path to a JSON override table replacing the built-in one. `None` for built-in.
    pub overrides_path: Option<PathBuf>,
}

/// The symbol-sequence-to-sentence interpretation engine.
pub struct Interpreter {
    lexicon: TableRef<Lexicon>,
    overrides: TableRef<OverrideTable>,
}

/// A table is either the process-wide built-in or an owned loaded one.
enum TableRef<T: 'static> {
    Builtin(&'static T),
    Loaded(Arc<T>),
}

impl<T> TableRef<T> {
    fn get(&self) -> &T {
        match self {
            TableRef::Builtin(t) => t,
            TableRef::Loaded(t) => t,
        }
    }
}

impl Interpreter {
    /// Create an interpreter, loading any tables named in the config.
    pub fn new(config: InterpreterConfig) -> PictoResult<Self> {
        let lexicon = match &config.lexicon_path {
            Some(path) => TableRef::Loaded(Arc::new(Lexicon::from_json_file(path)?)),
            None => TableRef::Builtin(Lexicon::builtin()),
        };
        let overrides = match &config.overrides_path {
            Some(path) => TableRef::Loaded(Arc::new(OverrideTable::from_json_file(path)?)),
            None => TableRef::Builtin(OverrideTable::builtin()),
        };
        let interp = Self { lexicon, overrides };
        tracing::info!(
            symbols = interp.symbol_count(),
            overrides = interp.override_count(),
            "interpreter ready"
        );
        Ok(interp)
    }

    /// Interpreter over the built-in tables. Cannot fail.
    pub fn builtin() -> Self {
        Self {
            lexicon: TableRef::Builtin(Lexicon::builtin()),
            overrides: TableRef::Builtin(OverrideTable::builtin()),
        }
    }

    /// Interpret a raw symbol sequence as one sentence.
    ///
    /// Pure and total: any string produces a defined result, and identical
    /// input always yields identical output.
    pub fn interpret(&self, raw_sequence: &str) -> String {
        compose::compose(raw_sequence, self.lexicon.get(), self.overrides.get())
    }

    /// Tokenize a sequence into user-perceived symbol units.
    pub fn tokenize<'a>(&self, sequence: &'a str) -> Vec<&'a str> {
        token::tokenize(sequence)
    }

    /// Metadata for a single symbol, if known.
    pub fn lookup_symbol(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.lexicon.get().lookup(symbol)
    }

    /// The active lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon.get()
    }

    /// The active override table.
    pub fn overrides(&self) -> &OverrideTable {
        self.overrides.get()
    }

    /// Number of symbols in the active lexicon.
    pub fn symbol_count(&self) -> usize {
        self.lexicon.get().len()
    }

    /// Number of entries in the active override table.
    pub fn override_count(&self) -> usize {
        self.overrides.get().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_interpreter_interprets() {
        let interp = Interpreter::builtin();
        assert_eq!(interp.interpret("🧑‍🦯🍎"), "I apple");
    }

    #[test]
    fn default_config_uses_builtin_tables() {
        let interp = Interpreter::new(InterpreterConfig::default()).expect("built-in tables");
        assert!(interp.symbol_count() > 0);
        assert!(interp.override_count() > 0);
    }

    #[test]
    fn missing_table_file_is_a_diagnostic() {
        let config = InterpreterConfig {
            lexicon_path: Some("/nonexistent/lexicon.json".into()),
            ..Default::default()
        };
        assert!(Interpreter::new(config).is_err());
    }

    #[test]
    fn interpreter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpreter>();
    }
}
