//! Picker categories: the six tabs the symbol grid is organized under.
//!
//! Pure data behind the picker UI. A symbol may appear under more than one
//! tab; membership is presentational and has no effect on interpretation.

/// One picker category.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// The emoji shown on the tab itself.
    pub icon: &'static str,
    /// Machine-readable name.
    pub name: &'static str,
    /// Symbols shown in the grid, in display order. All are keys of the
    /// built-in lexicon.
    pub symbols: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        icon: "👥",
        name: "people",
        symbols: &["🧑‍🦯", "👨‍⚕️", "👩‍⚕️", "👨‍👩‍👧", "👋", "🙏", "📞"],
    },
    Category {
        icon: "🍔",
        name: "food",
        symbols: &["💧", "🚰", "🍎", "🍔", "🍟", "🥤", "☕", "🍽️"],
    },
    Category {
        icon: "🚕",
        name: "places",
        symbols: &[
            "➡️", "⬅️", "🏠", "🏥", "🛒", "🚕", "🚗", "📍", "🚽", "🛏️", "🧥", "🔑", "📱", "🔋",
            "💰", "⏰",
        ],
    },
    Category {
        icon: "❤️",
        name: "responses",
        symbols: &["👍", "👎", "✅", "❌", "❓", "❤️", "❗", "🆘"],
    },
    Category {
        icon: "⚕️",
        name: "medical",
        symbols: &["💊", "💉", "🩺", "🚨", "🤢", "🤮", "🤕", "🦵", "😖"],
    },
    Category {
        icon: "😀",
        name: "feelings",
        symbols: &["🙂", "😀", "😢", "😴", "💤", "🤔", "🥵", "🥶", "🥱"],
    },
];

/// All categories in tab order.
pub fn all_categories() -> &'static [Category] {
    CATEGORIES
}

/// Look up a category by its tab icon.
pub fn lookup(icon: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.icon == icon)
}
