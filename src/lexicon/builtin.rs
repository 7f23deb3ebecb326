//! Built-in symbol catalog: the default communication vocabulary.
//!
//! Covers everyday needs (food, travel, feelings, medical) for users who
//! have no custom table. Each row is (symbol, role, gloss). Symbols are
//! full grapheme clusters; several are ZWJ sequences and must stay intact.

use super::Role;

/// All rows of the built-in catalog.
pub fn entries() -> &'static [(&'static str, Role, &'static str)] {
    ENTRIES
}

const ENTRIES: &[(&str, Role, &str)] = &[
    // -- People & greetings --
    ("🧑‍🦯", Role::Subject, "I"),
    ("👨‍⚕️", Role::Subject, "doctor"),
    ("👩‍⚕️", Role::Subject, "doctor"),
    ("👋", Role::Action, "wave hello"),
    ("🙏", Role::Action, "please"),
    ("📞", Role::Action, "call"),
    ("👨‍👩‍👧", Role::Object, "family"),
    // -- Feelings --
    ("🙂", Role::Descriptor, "happy"),
    ("😀", Role::Descriptor, "happy"),
    ("😢", Role::Descriptor, "sad"),
    ("😴", Role::Descriptor, "tired"),
    ("💤", Role::Descriptor, "sleeping"),
    ("🤔", Role::Descriptor, "thinking"),
    ("🥵", Role::Descriptor, "hot"),
    ("🥶", Role::Descriptor, "cold"),
    ("🥱", Role::Descriptor, "bored"),
    // -- Responses --
    ("👍", Role::Descriptor, "yes"),
    ("👎", Role::Descriptor, "no"),
    ("✅", Role::Descriptor, "yes"),
    ("❌", Role::Descriptor, "no"),
    ("❓", Role::Descriptor, "question"),
    ("❤️", Role::Descriptor, "love"),
    // -- Food & drink --
    ("💧", Role::Object, "water"),
    ("🚰", Role::Object, "water tap"),
    ("🍎", Role::Object, "apple"),
    ("🍔", Role::Object, "burger"),
    ("🍟", Role::Object, "fries"),
    ("🥤", Role::Object, "drink"),
    ("☕", Role::Object, "coffee"),
    ("🍽️", Role::Object, "food"),
    // -- Movement & places --
    ("➡️", Role::Action, "go to"),
    ("⬅️", Role::Action, "come from"),
    ("🛒", Role::Object, "shopping"),
    ("🏠", Role::Object, "home"),
    ("🏥", Role::Object, "hospital"),
    ("🚕", Role::Object, "taxi"),
    ("🚗", Role::Object, "car"),
    ("📍", Role::Object, "location"),
    // -- Urgency & health --
    ("❗", Role::Descriptor, "urgent"),
    ("🚨", Role::Descriptor, "emergency"),
    ("🆘", Role::Descriptor, "help"),
    ("💊", Role::Object, "medicine"),
    ("💉", Role::Object, "injection"),
    ("🩺", Role::Object, "doctor"),
    ("🤢", Role::Descriptor, "nauseous"),
    ("🤮", Role::Descriptor, "sick"),
    ("🤕", Role::Descriptor, "headache"),
    ("🦵", Role::Object, "leg"),
    ("😖", Role::Descriptor, "pain"),
    // -- Everyday objects --
    ("🚽", Role::Object, "restroom"),
    ("🧥", Role::Object, "jacket"),
    ("🔑", Role::Object, "keys"),
    ("📱", Role::Object, "phone"),
    ("🔋", Role::Object, "battery"),
    ("💰", Role::Object, "money"),
    ("⏰", Role::Object, "time"),
    ("🛏️", Role::Object, "bed"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_duplicate_symbols() {
        let mut seen = std::collections::HashSet::new();
        for &(symbol, _, _) in entries() {
            assert!(seen.insert(symbol), "duplicate catalog symbol {symbol}");
        }
    }

    #[test]
    fn glosses_are_nonempty() {
        for &(symbol, _, gloss) in entries() {
            assert!(!gloss.is_empty(), "symbol {symbol} has empty gloss");
        }
    }

    #[test]
    fn roles_cover_all_variants() {
        for role in [Role::Subject, Role::Action, Role::Object, Role::Descriptor] {
            assert!(
                entries().iter().any(|&(_, r, _)| r == role),
                "no catalog entry with role {role:?}"
            );
        }
    }

    #[test]
    fn every_symbol_is_one_grapheme_cluster() {
        for &(symbol, _, _) in entries() {
            assert_eq!(
                crate::token::tokenize(symbol).len(),
                1,
                "symbol {symbol} splits into multiple tokens"
            );
        }
    }
}
