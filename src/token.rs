//! Grapheme tokenizer: splits a symbol sequence into user-perceived units.
//!
//! A single pictograph may span several code points (a base emoji plus a
//! variation selector, a skin-tone modifier, or a whole ZWJ sequence like
//! "👨‍⚕️"). Table lookups key on the full unit, so the tokenizer must never
//! split one apart. Extended grapheme clusters give exactly that boundary.

use unicode_segmentation::UnicodeSegmentation;

/// Split a raw sequence into ordered symbol units.
///
/// Every string is valid input: plain text tokenizes per-grapheme and an
/// empty string yields an empty vec. Tokens borrow from the input.
pub fn tokenize(sequence: &str) -> Vec<&str> {
    sequence.graphemes(true).collect()
}
