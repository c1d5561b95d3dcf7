//! Rune sampling and orientation.
//!
//! Runes are drawn uniformly without replacement; each drawn rune then gets
//! an independent fair coin flip for its orientation. The random source is
//! always passed in so draws are reproducible from a seed.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use rune_core::{Card, Deck};

use crate::error::{OracleError, OracleResult};
use crate::spread::Spread;

/// Whether a drawn rune lies upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Read with its upright meaning.
    Upright,
    /// Read with its reversed meaning.
    Reversed,
}

impl Orientation {
    /// The meaning of `card` in this orientation.
    pub fn meaning_of(self, card: &Card) -> &str {
        match self {
            Self::Upright => &card.meaning,
            Self::Reversed => &card.reversed_meaning,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// A rune drawn into a spread position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnRune<'d> {
    /// The rune.
    pub card: &'d Card,
    /// How it landed.
    pub orientation: Orientation,
}

impl std::fmt::Display for DrawnRune<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.card, self.orientation)
    }
}

/// The ordered result of one draw, positionally paired with a spread's labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw<'d> {
    /// Drawn runes in position order.
    pub runes: Vec<DrawnRune<'d>>,
}

impl<'d> Draw<'d> {
    /// Pair drawn runes with their positions.
    pub fn new(cards: Vec<&'d Card>, orientations: Vec<Orientation>) -> Self {
        debug_assert_eq!(
            cards.len(),
            orientations.len(),
            "one orientation per drawn rune"
        );
        let runes = cards
            .into_iter()
            .zip(orientations)
            .map(|(card, orientation)| DrawnRune { card, orientation })
            .collect();
        Self { runes }
    }

    /// Number of drawn runes.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Whether nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Iterate over `(label, rune)` pairs in position order.
    pub fn positions<'s>(
        &'s self,
        spread: Spread,
    ) -> impl Iterator<Item = (&'static str, &'s DrawnRune<'d>)> + 's {
        debug_assert_eq!(
            spread.count(),
            self.runes.len(),
            "draw does not fit the {spread} spread"
        );
        spread.labels().iter().copied().zip(self.runes.iter())
    }
}

/// Draw `k` distinct runes uniformly at random, in random order.
pub fn draw<'d>(deck: &'d Deck, k: usize, rng: &mut StdRng) -> OracleResult<Vec<&'d Card>> {
    if k > deck.len() {
        return Err(OracleError::DeckTooSmall {
            requested: k,
            available: deck.len(),
        });
    }

    let mut pool: Vec<&Card> = deck.iter().collect();
    let (picked, _) = pool.partial_shuffle(rng, k);
    Ok(picked.to_vec())
}

/// Flip an independent fair coin for each of `k` runes.
pub fn randomize_orientations(k: usize, rng: &mut StdRng) -> Vec<Orientation> {
    (0..k)
        .map(|_| {
            if rng.random_bool(0.5) {
                Orientation::Reversed
            } else {
                Orientation::Upright
            }
        })
        .collect()
}

/// Draw a full spread: runes first, then their orientations.
pub fn draw_spread<'d>(
    deck: &'d Deck,
    spread: Spread,
    rng: &mut StdRng,
) -> OracleResult<Draw<'d>> {
    let cards = draw(deck, spread.count(), rng)?;
    let orientations = randomize_orientations(cards.len(), rng);
    Ok(Draw::new(cards, orientations))
}
