//! Narrative composition for draws and deck listings.
//!
//! Everything here is pure text construction: a plain summary shown to the
//! user right away, and an [`InterpretationRequest`] (system prompt plus user
//! prompt) handed to the external text generator.

mod templates;

use serde::{Deserialize, Serialize};

use rune_core::Deck;

use crate::config::{InterpretationDepth, ReadingConfig};
use crate::draw::{Draw, Orientation};
use crate::spread::Spread;

pub use templates::HISTORY_MARKER;

/// Question used when the caller does not ask one.
pub const DEFAULT_QUESTION: &str = "I would like guidance about the future.";

/// Text handed to the interpretation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    /// Persona and task instruction.
    pub system_prompt: String,
    /// The composed reading.
    pub prompt: String,
}

/// The question to ask, falling back to [`DEFAULT_QUESTION`] when absent or blank.
pub fn question_or_default(question: Option<&str>) -> &str {
    match question.map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => DEFAULT_QUESTION,
    }
}

/// Header line followed by one `<label>: <symbol> <name> (<orientation>)` line
/// per position.
pub fn render_summary(draw: &Draw<'_>, spread: Spread) -> String {
    let mut lines = vec![templates::summary_header(spread).to_string()];
    for (label, rune) in draw.positions(spread) {
        lines.push(format!("{label}: {rune}"));
    }
    lines.join("\n")
}

/// The user prompt for a draw.
pub fn render_prompt(
    draw: &Draw<'_>,
    spread: Spread,
    question: Option<&str>,
    depth: InterpretationDepth,
    include_history: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Question: {}\n\n", question_or_default(question)));
    out.push_str(&format!("{} result:\n", spread.title()));
    for (i, (label, rune)) in draw.positions(spread).enumerate() {
        out.push_str(&format!("{}. {label}: {rune}\n", i + 1));
    }

    let first = draw.runes.first();
    let orientation = first.map_or(Orientation::Upright, |r| r.orientation);
    out.push('\n');
    out.push_str(&templates::instruction(spread, orientation, depth.directive()));

    if include_history {
        out.push_str("\n\n");
        out.push_str(&templates::history(spread, first.map(|r| r.card)));
    }

    out
}

/// The deck listing prompt: every rune with both meanings, keywords, and
/// category, for the interpretation service to lay out.
pub fn render_table_listing(deck: &Deck) -> String {
    let entries: Vec<String> = deck
        .iter()
        .map(|card| {
            format!(
                "Rune: {} {} ({})\nMeaning: {}\nReversed: {}\nKeywords: {}\nCategory: {}",
                card.symbol,
                card.name,
                card.english_name,
                card.meaning,
                card.reversed_meaning,
                card.keywords.join(", "),
                card.category,
            )
        })
        .collect();

    format!(
        "{}\n\n{}\n\n{}",
        templates::TABLE_INTRO,
        entries.join("\n\n"),
        templates::TABLE_OUTRO
    )
}

/// Persona and task for a spread reading.
pub fn system_prompt(spread: Spread) -> &'static str {
    templates::spread_system_prompt(spread)
}

/// Build the full request for a draw.
pub fn compose_request(
    draw: &Draw<'_>,
    spread: Spread,
    question: Option<&str>,
    config: &ReadingConfig,
) -> InterpretationRequest {
    InterpretationRequest {
        system_prompt: system_prompt(spread).to_string(),
        prompt: render_prompt(
            draw,
            spread,
            question,
            config.depth,
            config.include_history,
        ),
    }
}

/// Build the request for the deck listing.
pub fn table_request(deck: &Deck) -> InterpretationRequest {
    InterpretationRequest {
        system_prompt: templates::TABLE_SYSTEM_PROMPT.to_string(),
        prompt: render_table_listing(deck),
    }
}
