//! Rune name lookup with fuzzy suggestions.

use strsim::jaro_winkler;

use rune_core::{Card, Deck};

use crate::error::{OracleError, OracleResult};

/// Minimum similarity for a rune to be suggested (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.75;

/// Find a rune by name, or fail with up to three close names.
pub fn find_rune<'d>(deck: &'d Deck, name: &str) -> OracleResult<&'d Card> {
    deck.find_by_name(name)
        .ok_or_else(|| OracleError::UnknownRune {
            name: name.trim().to_string(),
            suggestions: suggest_runes(deck, name, 3),
        })
}

/// Rune names resembling `partial`, best first.
///
/// Prefix matches rank above substring matches, which rank above fuzzy
/// matches on either the primary or alternate name.
pub fn suggest_runes(deck: &Deck, partial: &str, limit: usize) -> Vec<String> {
    let partial = partial.trim().to_lowercase();
    if partial.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(String, f64)> = deck
        .iter()
        .filter_map(|card| {
            let name = card.name.to_lowercase();
            let alt = card.english_name.to_lowercase();
            let score = if name.starts_with(&partial) || alt.starts_with(&partial) {
                2.0
            } else if name.contains(&partial) || alt.contains(&partial) {
                1.0
            } else {
                jaro_winkler(&partial, &name).max(jaro_winkler(&partial, &alt))
            };
            (score >= SUGGEST_THRESHOLD).then(|| (card.name.clone(), score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored.into_iter().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::builtin().unwrap()
    }

    #[test]
    fn exact_name_found() {
        let deck = deck();
        assert_eq!(find_rune(&deck, "Laguz").unwrap().symbol, "ᛚ");
        assert_eq!(find_rune(&deck, "water").unwrap().name, "Laguz");
    }

    #[test]
    fn typo_suggests_close_name() {
        let deck = deck();
        match find_rune(&deck, "Fehuu") {
            Err(OracleError::UnknownRune { suggestions, .. }) => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Fehu"));
            }
            other => panic!("expected UnknownRune, got {other:?}"),
        }
    }

    #[test]
    fn prefix_ranks_first() {
        let deck = deck();
        let suggestions = suggest_runes(&deck, "ing", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Ingwaz"));
    }

    #[test]
    fn nonsense_has_no_suggestions() {
        let deck = deck();
        assert!(suggest_runes(&deck, "xqzv", 3).is_empty());
        assert!(suggest_runes(&deck, "  ", 3).is_empty());
    }

    #[test]
    fn limit_is_respected() {
        let deck = deck();
        assert!(suggest_runes(&deck, "a", 2).len() <= 2);
    }
}
