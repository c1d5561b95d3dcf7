use serde::{Deserialize, Serialize};

/// A single rune: glyph, names, orientation-dependent meanings, and metadata.
///
/// Runes are identified by [`name`](Card::name), which is assumed unique
/// within a deck. They are created once when a deck is loaded and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The rune glyph, e.g. `ᚠ`.
    pub symbol: String,
    /// Primary name, e.g. `Fehu`.
    pub name: String,
    /// Alternate-language name, e.g. `Cattle`.
    pub english_name: String,
    /// Meaning when drawn upright.
    pub meaning: String,
    /// Meaning when drawn reversed.
    pub reversed_meaning: String,
    /// Keyword tags.
    pub keywords: Vec<String>,
    /// Category label (the rune's aett in the built-in deck).
    pub category: String,
}

impl Card {
    /// Create a rune with no keywords.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        english_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            english_name: english_name.into(),
            meaning: String::new(),
            reversed_meaning: String::new(),
            keywords: Vec::new(),
            category: category.into(),
        }
    }

    /// Set both meanings.
    pub fn with_meanings(
        mut self,
        upright: impl Into<String>,
        reversed: impl Into<String>,
    ) -> Self {
        self.meaning = upright.into();
        self.reversed_meaning = reversed.into();
        self
    }

    /// Add a keyword tag.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Whether this rune answers to `name`, either its primary or its
    /// alternate name (case-insensitive).
    pub fn matches_name(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.name.to_lowercase() == needle || self.english_name.to_lowercase() == needle
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol, self.name)
    }
}
