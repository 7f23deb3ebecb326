//! Sentence composer: the interpretation policy.
//!
//! Deterministic and total over all string inputs. Precedence order:
//! empty input, then override table, then role-driven composition, then
//! raw fallback transcription. See [`compose`] for the exact walk.

use crate::lexicon::{Lexicon, Role};
use crate::overrides::OverrideTable;
use crate::token;

/// Interpret a raw symbol sequence as a single sentence.
///
/// 1. Empty input returns the empty string.
/// 2. An exact override-table hit on the raw sequence is returned verbatim.
/// 3. Otherwise tokens are folded in order: the first `Subject` token puts
///    "I" at the front (its gloss is not appended) and claims the subject
///    slot; every other known token, including later subjects, appends its
///    gloss in place; unknown tokens are skipped.
/// 4. If no token had metadata, the raw tokens are returned space-joined
///    and uncapitalized (fallback transcription).
/// 5. Otherwise the glosses are space-joined and the first character
///    uppercased.
///
/// Never panics, never errors.
pub fn compose(raw_sequence: &str, lexicon: &Lexicon, overrides: &OverrideTable) -> String {
    if raw_sequence.is_empty() {
        return String::new();
    }

    if let Some(sentence) = overrides.lookup(raw_sequence) {
        tracing::debug!(sequence = raw_sequence, "override hit");
        return sentence.to_string();
    }

    let tokens = token::tokenize(raw_sequence);

    let acc = tokens.iter().fold(Accumulator::default(), |mut acc, tok| {
        match lexicon.lookup(tok) {
            Some(info) if info.role == Role::Subject && !acc.subject_claimed => {
                // The speaker's own symbol: pronoun up front, gloss dropped.
                acc.parts.insert(0, "I".to_string());
                acc.subject_claimed = true;
            }
            Some(info) => acc.parts.push(info.gloss.clone()),
            None => {}
        }
        acc
    });

    if acc.parts.is_empty() {
        // Nothing recognized: transcribe the tokens as-is, unformatted.
        tracing::debug!(sequence = raw_sequence, "fallback transcription");
        return tokens.join(" ");
    }

    capitalize_first(&acc.parts.join(" "))
}

/// Single-call fold state; never outlives one composition.
#[derive(Default)]
struct Accumulator {
    parts: Vec<String>,
    subject_claimed: bool,
}

/// Uppercase the first character, leaving the rest unchanged.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
