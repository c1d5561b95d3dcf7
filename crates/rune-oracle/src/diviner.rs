//! Reading entry point.
//!
//! `Diviner` owns a shared deck, the reading configuration, and the random
//! source. One call to [`Diviner::divine`] resolves a method token, draws,
//! and composes everything the caller needs to display and forward.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use rune_core::{Card, Deck};

use crate::compose::{
    InterpretationRequest, compose_request, question_or_default, render_summary, table_request,
};
use crate::config::ReadingConfig;
use crate::draw::{Orientation, draw_spread};
use crate::error::OracleResult;
use crate::spread::{Method, Spread, resolve};

/// A rune placed in a spread position, owned so it outlives the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedRune {
    /// Position label.
    pub position: &'static str,
    /// The rune.
    pub card: Card,
    /// How it landed.
    pub orientation: Orientation,
}

/// The outcome of drawing a spread.
#[derive(Debug, Clone, Serialize)]
pub struct SpreadReading {
    /// Which spread was drawn.
    pub spread: Spread,
    /// The question, after default substitution.
    pub question: String,
    /// Drawn runes in position order.
    pub runes: Vec<PlacedRune>,
    /// Plain summary for immediate display.
    pub summary: String,
    /// Request for the interpretation service.
    pub request: InterpretationRequest,
}

/// The outcome of one invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Reading {
    /// Runes were drawn into a spread.
    Spread(SpreadReading),
    /// The whole deck was listed.
    Table(InterpretationRequest),
}

impl Reading {
    /// The request for the interpretation service.
    pub fn request(&self) -> &InterpretationRequest {
        match self {
            Self::Spread(reading) => &reading.request,
            Self::Table(request) => request,
        }
    }
}

/// Draws and composes readings from a shared deck.
pub struct Diviner {
    deck: Arc<Deck>,
    config: ReadingConfig,
    rng: StdRng,
}

impl Diviner {
    /// Create a diviner. Seeds from `config.seed` when set, otherwise from the OS.
    pub fn new(deck: Arc<Deck>, config: ReadingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { deck, config, rng }
    }

    /// Get the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Get the reading configuration.
    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    /// Resolve `method` and produce a reading for `question`.
    pub fn divine(&mut self, method: &str, question: Option<&str>) -> OracleResult<Reading> {
        match resolve(method)? {
            Method::Table => {
                tracing::debug!(runes = self.deck.len(), "listing deck");
                Ok(Reading::Table(table_request(&self.deck)))
            }
            Method::Spread(spread) => self.read_spread(spread, question).map(Reading::Spread),
        }
    }

    /// Draw `spread` and compose its summary and request.
    pub fn read_spread(
        &mut self,
        spread: Spread,
        question: Option<&str>,
    ) -> OracleResult<SpreadReading> {
        let question = question_or_default(question).to_string();
        tracing::debug!(%spread, count = spread.count(), "drawing spread");

        let draw = draw_spread(&self.deck, spread, &mut self.rng)?;
        for (position, rune) in draw.positions(spread) {
            tracing::trace!(position, %rune, "drew rune");
        }

        let summary = render_summary(&draw, spread);
        let request = compose_request(&draw, spread, Some(&question), &self.config);
        let runes = draw
            .positions(spread)
            .map(|(position, rune)| PlacedRune {
                position,
                card: rune.card.clone(),
                orientation: rune.orientation,
            })
            .collect();

        Ok(SpreadReading {
            spread,
            question,
            runes,
            summary,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{DEFAULT_QUESTION, HISTORY_MARKER};
    use crate::config::InterpretationDepth;
    use crate::error::OracleError;

    fn diviner(config: ReadingConfig) -> Diviner {
        Diviner::new(Arc::new(Deck::builtin().unwrap()), config.with_seed(42))
    }

    fn spread_reading(reading: Reading) -> SpreadReading {
        match reading {
            Reading::Spread(r) => r,
            Reading::Table(_) => panic!("expected a spread reading"),
        }
    }

    #[test]
    fn single_reading_end_to_end() {
        let mut d = diviner(ReadingConfig::default());
        let reading = spread_reading(d.divine("single", Some("today's outlook")).unwrap());

        assert_eq!(reading.spread, Spread::Single);
        assert_eq!(reading.runes.len(), 1);
        let rune = &reading.runes[0];
        assert!(d.deck().find_by_name(&rune.card.name).is_some());

        let lines: Vec<&str> = reading.summary.lines().collect();
        assert_eq!(lines.len(), 2);
        let expected = format!(
            "single position: {} {} ({})",
            rune.card.symbol, rune.card.name, rune.orientation
        );
        assert_eq!(lines[1], expected);

        let prompt = &reading.request.prompt;
        assert!(prompt.contains("today's outlook"));
        assert!(prompt.contains(&format!("1. {expected}")));
        assert!(prompt.contains("a detailed interpretation"));
        assert!(prompt.contains(HISTORY_MARKER));
    }

    #[test]
    fn every_spread_summary_has_k_plus_one_lines() {
        let mut d = diviner(ReadingConfig::default());
        for spread in Spread::all() {
            let reading = d.read_spread(*spread, None).unwrap();
            assert_eq!(reading.summary.lines().count(), spread.count() + 1);
            for (line, placed) in reading.summary.lines().skip(1).zip(&reading.runes) {
                assert!(line.starts_with(placed.position));
                assert!(line.contains(&placed.card.symbol));
                assert!(line.contains(&placed.card.name));
                assert!(line.ends_with(&format!("({})", placed.orientation)));
            }
        }
    }

    #[test]
    fn missing_question_uses_default() {
        let mut d = diviner(ReadingConfig::default());
        let reading = spread_reading(d.divine("three", None).unwrap());
        assert_eq!(reading.question, DEFAULT_QUESTION);
        assert!(reading.request.prompt.contains(DEFAULT_QUESTION));
    }

    #[test]
    fn config_controls_prompt() {
        let config = ReadingConfig::default()
            .with_depth(InterpretationDepth::Concise)
            .with_history(false);
        let mut d = diviner(config);
        let reading = spread_reading(d.divine("NINE", Some("career")).unwrap());
        assert!(reading.request.prompt.contains("a brief interpretation"));
        assert!(!reading.request.prompt.contains(HISTORY_MARKER));
    }

    #[test]
    fn table_lists_whole_deck() {
        let mut d = diviner(ReadingConfig::default());
        let reading = d.divine("table", None).unwrap();
        let Reading::Table(request) = reading else {
            panic!("expected table");
        };
        for card in d.deck() {
            assert!(request.prompt.contains(&card.name));
            assert!(request.prompt.contains(&card.meaning));
            assert!(request.prompt.contains(&card.reversed_meaning));
        }
    }

    #[test]
    fn invalid_method_is_reported() {
        let mut d = diviner(ReadingConfig::default());
        assert!(matches!(
            d.divine("tarot", None),
            Err(OracleError::InvalidMethod { .. })
        ));
        assert!(matches!(d.divine("", None), Err(OracleError::MissingMethod)));
    }

    #[test]
    fn seeded_diviners_agree() {
        let mut a = diviner(ReadingConfig::default());
        let mut b = diviner(ReadingConfig::default());
        let ra = a.read_spread(Spread::Five, Some("q")).unwrap();
        let rb = b.read_spread(Spread::Five, Some("q")).unwrap();
        assert_eq!(ra.runes, rb.runes);
        assert_eq!(ra.request, rb.request);
    }

    #[test]
    fn reading_serializes_with_kind_tag() {
        let mut d = diviner(ReadingConfig::default());
        let reading = d.divine("single", Some("q")).unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["kind"], "spread");
        assert_eq!(json["spread"], "Single");
        assert_eq!(json["runes"].as_array().unwrap().len(), 1);
        assert!(json["request"]["system_prompt"].is_string());
    }
}
