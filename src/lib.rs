//! # pictospeak
//!
//! Symbol-sequence-to-sentence interpretation for augmentative
//! communication: a user composes a phrase from pictographic symbols and
//! the engine deterministically turns it into a spoken-language sentence.
//!
//! ## Architecture
//!
//! - **Tokenizer** (`token`): user-perceived symbol units via extended
//!   grapheme clusters; a ZWJ sequence is one symbol
//! - **Lexicon** (`lexicon`): immutable symbol → role + gloss table with a
//!   built-in catalog and picker categories
//! - **Overrides** (`overrides`): exact-sequence → idiomatic sentence table,
//!   always winning over composition
//! - **Composer** (`compose`): the interpretation policy — override, then
//!   role-driven composition, then raw fallback transcription
//! - **Phrase model** (`phrase`, `store`): editing buffer plus
//!   favorites/history of raw sequences
//!
//! Interpretation is pure, synchronous, and total: any input string yields
//! a defined sentence, and the tables never change after startup, so the
//! engine can be shared freely across threads.
//!
//! ## Library usage
//!
//! ```
//! use pictospeak::interpreter::Interpreter;
//!
//! let interp = Interpreter::builtin();
//! assert_eq!(interp.interpret("🧑‍🦯🍎"), "I apple");
//! assert_eq!(interp.interpret("👋🙂"), "Hello friend"); // override hit
//! assert_eq!(interp.interpret(""), "");
//! ```

pub mod compose;
pub mod error;
pub mod interpreter;
pub mod lexicon;
pub mod overrides;
pub mod phrase;
pub mod store;
pub mod token;
