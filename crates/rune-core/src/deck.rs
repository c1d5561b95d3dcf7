use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{CoreError, CoreResult};

/// Minimum number of runes a deck must hold so the largest spread can be drawn.
pub const MIN_DECK_SIZE: usize = 9;

/// The built-in Elder Futhark deck: 24 runes in three aettir.
const BUILTIN_DECK: &str = include_str!("../data/runes.json");

/// On-disk shape of a deck document.
#[derive(Serialize, Deserialize)]
struct DeckDocument {
    runes: Vec<Card>,
}

/// An ordered, read-only collection of runes.
///
/// A deck is loaded once at startup and shared by every reading. It exposes
/// no mutation; share it across readers with an `Arc<Deck>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from runes, enforcing [`MIN_DECK_SIZE`].
    pub fn new(cards: Vec<Card>) -> CoreResult<Self> {
        if cards.len() < MIN_DECK_SIZE {
            return Err(CoreError::DeckTooSmall {
                found: cards.len(),
                required: MIN_DECK_SIZE,
            });
        }
        Ok(Self { cards })
    }

    /// Parse a deck from a JSON document of the form `{ "runes": [...] }`.
    pub fn from_json(source: &str) -> CoreResult<Self> {
        let doc: DeckDocument = serde_json::from_str(source)?;
        Self::new(doc.runes)
    }

    /// Load a deck from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_json(&source)?;
        tracing::debug!(path = %path.display(), runes = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// The embedded Elder Futhark deck.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_DECK)
    }

    /// Serialize the deck back to the JSON document format.
    pub fn to_json(&self) -> CoreResult<String> {
        let doc = DeckDocument {
            runes: self.cards.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// All runes in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over runes in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Number of runes in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no runes. Always false for a deck built
    /// through [`Deck::new`].
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a rune by primary or alternate name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.matches_name(name))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.category.as_str()) {
                seen.push(&card.category);
            }
        }
        seen
    }

    /// All runes in a category (case-insensitive), in deck order.
    pub fn by_category(&self, category: &str) -> Vec<&Card> {
        let category = category.to_lowercase();
        self.cards
            .iter()
            .filter(|c| c.category.to_lowercase() == category)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn small_deck_json(count: usize) -> String {
        let runes: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"symbol":"S{i}","name":"Rune{i}","english_name":"E{i}","meaning":"up","reversed_meaning":"down","keywords":["k"],"category":"C{}"}}"#,
                    i % 2
                )
            })
            .collect();
        format!(r#"{{"runes":[{}]}}"#, runes.join(","))
    }

    #[test]
    fn builtin_deck_has_24_unique_runes() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.len(), 24);
        let names: HashSet<&str> = deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 24);
        let symbols: HashSet<&str> = deck.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols.len(), 24);
    }

    #[test]
    fn builtin_deck_has_three_aettir_of_eight() {
        let deck = Deck::builtin().unwrap();
        let categories = deck.categories();
        assert_eq!(
            categories,
            vec!["Freyr's Aett", "Heimdall's Aett", "Tyr's Aett"]
        );
        for category in categories {
            assert_eq!(deck.by_category(category).len(), 8, "{category}");
        }
    }

    #[test]
    fn builtin_runes_are_fully_populated() {
        let deck = Deck::builtin().unwrap();
        for card in &deck {
            assert!(!card.meaning.is_empty(), "{}", card.name);
            assert!(!card.reversed_meaning.is_empty(), "{}", card.name);
            assert!(!card.keywords.is_empty(), "{}", card.name);
        }
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.find_by_name("fehu").unwrap().symbol, "ᚠ");
        assert_eq!(deck.find_by_name("SUN").unwrap().name, "Sowilo");
        assert!(deck.find_by_name("Nonexistent").is_none());
    }

    #[test]
    fn from_json_accepts_minimum_size() {
        let deck = Deck::from_json(&small_deck_json(MIN_DECK_SIZE)).unwrap();
        assert_eq!(deck.len(), MIN_DECK_SIZE);
        assert_eq!(deck.categories(), vec!["C0", "C1"]);
    }

    #[test]
    fn from_json_rejects_small_deck() {
        let err = Deck::from_json(&small_deck_json(8)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DeckTooSmall {
                found: 8,
                required: 9
            }
        ));
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        assert!(matches!(
            Deck::from_json("{ not json").unwrap_err(),
            CoreError::Parse(_)
        ));
        assert!(matches!(
            Deck::from_json(r#"{ "cards": [] }"#).unwrap_err(),
            CoreError::Parse(_)
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let err = Deck::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_reads_file_and_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("deck.json");
        let deck = Deck::builtin().unwrap();
        std::fs::write(&path, deck.to_json().unwrap()).unwrap();
        assert_eq!(Deck::load(&path).unwrap(), deck);
    }
}
