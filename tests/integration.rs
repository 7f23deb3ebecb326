//! End-to-end tests for the pictospeak engine.
//!
//! These exercise the full pipeline through the `Interpreter` facade:
//! table construction (built-in and loaded from JSON), the override /
//! composition / fallback precedence, and the phrase store.

use std::io::Write;

use pictospeak::interpreter::{Interpreter, InterpreterConfig};
use pictospeak::store::PhraseStore;

fn builtin() -> Interpreter {
    Interpreter::builtin()
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(builtin().interpret(""), "");
}

#[test]
fn determinism_across_calls_and_instances() {
    let a = builtin();
    let b = builtin();
    for seq in ["👋🙂", "🧑‍🦯🍎", "🦄🦄", "", "🧑‍🦯➡️🏥🚕❗"] {
        assert_eq!(a.interpret(seq), a.interpret(seq));
        assert_eq!(a.interpret(seq), b.interpret(seq));
    }
}

#[test]
fn override_takes_precedence_over_composition() {
    let interp = builtin();
    assert_eq!(interp.interpret("👋🙂"), "Hello friend");
    // Same symbols reordered miss the override and compose instead.
    assert_eq!(interp.interpret("🙂👋"), "Happy wave hello");
}

#[test]
fn unknown_only_input_transcribes_raw_tokens() {
    let interp = builtin();
    assert_eq!(interp.interpret("🦄🦄"), "🦄 🦄");
}

#[test]
fn subject_plus_object_composes_with_fronted_pronoun() {
    let interp = builtin();
    assert_eq!(interp.interpret("🧑‍🦯🍎"), "I apple");
}

#[test]
fn unknown_token_between_known_ones_is_dropped() {
    let interp = builtin();
    assert_eq!(interp.interpret("👋🦄🙂"), "Wave hello happy");
}

#[test]
fn composed_sentences_start_uppercase() {
    let interp = builtin();
    for seq in ["🙂👋", "💧🙏", "🧑‍🦯➡️🏥", "🤕💊🙏"] {
        let out = interp.interpret(seq);
        assert!(!out.is_empty());
        assert!(
            out.chars().next().unwrap().is_uppercase(),
            "{seq} composed to uncapitalized {out:?}"
        );
    }
}

#[test]
fn repeated_interpretation_never_shifts_results() {
    let interp = builtin();
    let first = interp.interpret("🧑‍🦯💧🙏");
    for _ in 0..10 {
        let _ = interp.interpret("🦄");
        let _ = interp.interpret("");
        assert_eq!(interp.interpret("🧑‍🦯💧🙏"), first);
    }
}

#[test]
fn concurrent_interpretation_is_consistent() {
    let interp = std::sync::Arc::new(builtin());
    let expected = interp.interpret("🧑‍🦯➡️🏠");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interp = interp.clone();
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(interp.interpret("🧑‍🦯➡️🏠"), expected);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn custom_tables_load_from_json() {
    let dir = tempfile::TempDir::new().unwrap();

    let lexicon_path = dir.path().join("lexicon.json");
    let mut f = std::fs::File::create(&lexicon_path).unwrap();
    write!(
        f,
        r#"{{
            "🐈": {{ "role": "subject", "gloss": "cat" }},
            "🐟": {{ "role": "object", "gloss": "fish" }},
            "😻": {{ "gloss": "delighted" }}
        }}"#
    )
    .unwrap();

    let overrides_path = dir.path().join("overrides.json");
    let mut f = std::fs::File::create(&overrides_path).unwrap();
    write!(f, r#"{{ "🐈🐈": "The cats are everywhere" }}"#).unwrap();

    let interp = Interpreter::new(InterpreterConfig {
        lexicon_path: Some(lexicon_path),
        overrides_path: Some(overrides_path),
    })
    .unwrap();

    assert_eq!(interp.symbol_count(), 3);
    assert_eq!(interp.interpret("🐈🐟"), "I fish");
    assert_eq!(interp.interpret("🐈🐈"), "The cats are everywhere");
    assert_eq!(interp.interpret("😻🐟"), "Delighted fish");
    // Built-in symbols are gone under a replacement lexicon.
    assert_eq!(interp.interpret("🍎"), "🍎");
}

#[test]
fn malformed_lexicon_file_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("lexicon.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let result = Interpreter::new(InterpreterConfig {
        lexicon_path: Some(path),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn store_round_trip_keeps_raw_sequences() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("phrases.json");
    let interp = builtin();

    let mut store = PhraseStore::new();
    store.record("👋🙂");
    store.add_favorite("🧑‍🦯🏠");
    store.save(&path).unwrap();

    // Stored values are raw sequences; interpretation runs fresh on recall.
    let reloaded = PhraseStore::load(&path).unwrap();
    assert_eq!(reloaded.history(), ["👋🙂"]);
    assert_eq!(interp.interpret(&reloaded.history()[0]), "Hello friend");
    assert_eq!(interp.interpret(&reloaded.favorites()[0]), "I want to go home");
}
