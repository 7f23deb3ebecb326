//! Diagnostic error types for pictospeak.
//!
//! Interpretation itself is total: any input string produces a sentence, so
//! the composer has no error surface. Errors only arise when loading the
//! lexicon/override tables or the phrase store from disk. Each error carries
//! a miette `#[diagnostic]` code and help text.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the pictospeak engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, source chains) through to the
/// user.
#[derive(Debug, Error, Diagnostic)]
pub enum PictoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),
}

/// Convenience result alias used across the crate.
pub type PictoResult<T> = Result<T, PictoError>;

// ---------------------------------------------------------------------------
// Lexicon / override table errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LexiconError {
    #[error("cannot read table file {path}")]
    #[diagnostic(
        code(picto::lexicon::io),
        help(
            "Check that the file exists and is readable. Table files are \
             optional; omit the flag to use the built-in tables."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table file {path}")]
    #[diagnostic(
        code(picto::lexicon::parse),
        help(
            "Lexicon files map a symbol to {{ \"role\": \"subject|action|object|descriptor\", \
             \"gloss\": \"...\" }}; override files map an exact symbol sequence to a sentence. \
             Both must be JSON objects with string keys."
        )
    )]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate symbol {symbol:?} in lexicon")]
    #[diagnostic(
        code(picto::lexicon::duplicate),
        help("Every symbol key must be unique. Remove or merge the duplicate entry.")
    )]
    DuplicateSymbol { symbol: String },

    #[error("empty gloss for symbol {symbol:?}")]
    #[diagnostic(
        code(picto::lexicon::empty_gloss),
        help("Every lexicon entry must carry a non-empty gloss to contribute to a sentence.")
    )]
    EmptyGloss { symbol: String },
}

// ---------------------------------------------------------------------------
// Phrase store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("cannot access phrase store {path}")]
    #[diagnostic(
        code(picto::store::io),
        help(
            "Check that the store path is readable and its parent directory \
             exists. A missing store file is not an error; it loads as empty."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed phrase store {path}")]
    #[diagnostic(
        code(picto::store::parse),
        help(
            "The phrase store is a JSON object with \"favorites\" and \"history\" \
             arrays of raw symbol sequences. Delete the file to start over."
        )
    )]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no favorite at index {index} (store has {len})")]
    #[diagnostic(
        code(picto::store::bad_index),
        help("Favorite indices are zero-based; list favorites first to find the right one.")
    )]
    BadIndex { index: usize, len: usize },
}
