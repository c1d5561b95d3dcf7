//! Spread layouts and method resolution.
//!
//! A spread fixes how many runes are drawn and what each position means.
//! [`resolve`] maps a user-supplied method token to a spread or to the
//! table listing.

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{OracleError, OracleResult};

/// Minimum similarity for a "did you mean" suggestion (0.0-1.0).
const SUGGESTION_THRESHOLD: f64 = 0.8;

const SINGLE_LABELS: &[&str] = &["single position"];

const THREE_LABELS: &[&str] = &["past", "present", "future"];

const FIVE_LABELS: &[&str] = &[
    "center (present situation)",
    "above (challenge)",
    "below (advice)",
    "left (support)",
    "right (outcome)",
];

const NINE_LABELS: &[&str] = &[
    "Asgard (realm of the gods / final outcome)",
    "Vanaheim (the Vanir / relationships)",
    "Alfheim (light elves / spiritual guidance)",
    "Midgard (world of humans / present situation)",
    "Jotunheim (giants / challenges)",
    "Svartalfheim (dark elves / material foundation)",
    "Niflheim (realm of mist / the subconscious)",
    "Muspelheim (realm of fire / creativity)",
    "Helheim (realm of the dead / hidden forces)",
];

const SINGLE_TOKENS: &[&str] = &["single", "one", "1", "single-rune"];
const THREE_TOKENS: &[&str] = &["three", "3", "three-rune", "past-present-future"];
const FIVE_TOKENS: &[&str] = &["five", "5", "five-rune", "cross"];
const NINE_TOKENS: &[&str] = &["nine", "9", "nine-rune", "world-tree", "yggdrasil"];
const TABLE_TOKENS: &[&str] = &["table", "list", "all"];

/// A fixed rune layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spread {
    /// One rune for a quick answer.
    Single,
    /// Past, present, and future.
    Three,
    /// Five runes laid out in a cross.
    Five,
    /// Nine runes across the nine realms of the World Tree.
    Nine,
}

impl Spread {
    /// All spreads from smallest to largest.
    pub fn all() -> &'static [Self] {
        &[Self::Single, Self::Three, Self::Five, Self::Nine]
    }

    /// Number of runes drawn.
    pub fn count(self) -> usize {
        self.labels().len()
    }

    /// Position labels in draw order.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Single => SINGLE_LABELS,
            Self::Three => THREE_LABELS,
            Self::Five => FIVE_LABELS,
            Self::Nine => NINE_LABELS,
        }
    }

    /// Tokens that select this spread. The first is canonical.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::Single => SINGLE_TOKENS,
            Self::Three => THREE_TOKENS,
            Self::Five => FIVE_TOKENS,
            Self::Nine => NINE_TOKENS,
        }
    }

    /// Human-readable name of the layout.
    pub fn title(self) -> &'static str {
        match self {
            Self::Single => "Single rune",
            Self::Three => "Three-rune past-present-future",
            Self::Five => "Five-rune cross",
            Self::Nine => "Nine-rune World Tree",
        }
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// What a method token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Draw runes in a spread.
    Spread(Spread),
    /// List the whole deck instead of drawing.
    Table,
}

impl Method {
    /// Tokens for the table listing. The first is canonical.
    pub fn table_tokens() -> &'static [&'static str] {
        TABLE_TOKENS
    }
}

/// Resolve a method token (case-insensitive) to a spread or the table listing.
pub fn resolve(identifier: &str) -> OracleResult<Method> {
    let token = identifier.trim().to_lowercase();
    if token.is_empty() {
        return Err(OracleError::MissingMethod);
    }

    if TABLE_TOKENS.contains(&token.as_str()) {
        return Ok(Method::Table);
    }
    if let Some(spread) = Spread::all()
        .iter()
        .find(|s| s.tokens().contains(&token.as_str()))
    {
        return Ok(Method::Spread(*spread));
    }

    Err(OracleError::InvalidMethod {
        suggestion: suggest(&token).map(str::to_string),
        token: identifier.trim().to_string(),
    })
}

/// The known token most similar to `token`, if any clears the threshold.
fn suggest(token: &str) -> Option<&'static str> {
    Spread::all()
        .iter()
        .flat_map(|s| s.tokens().iter())
        .chain(TABLE_TOKENS.iter())
        .map(|known| (*known, jaro_winkler(token, known)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(known, _)| known)
}
