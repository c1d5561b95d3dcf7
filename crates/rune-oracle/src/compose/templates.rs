//! Fixed phrasing for each spread.

use rune_core::Card;

use crate::draw::Orientation;
use crate::spread::Spread;

/// Every history clause opens with this phrase.
pub const HISTORY_MARKER: &str = "Please include some historical background";

/// Header line above the plain summary.
pub fn summary_header(spread: Spread) -> &'static str {
    match spread {
        Spread::Single | Spread::Three | Spread::Five => "You drew:",
        Spread::Nine => "Your runes across the nine realms of the World Tree:",
    }
}

/// Instruction clause closing the prompt. `first` is the orientation of the
/// first drawn rune, which the single-rune reading refers to directly.
pub fn instruction(spread: Spread, first: Orientation, directive: &str) -> String {
    match spread {
        Spread::Single => format!(
            "Based on the {first} meaning of this rune, provide {directive} for this question."
        ),
        Spread::Three => format!(
            "Based on how these three runes relate through their upright and reversed \
             positions, trace the course from past through present to future and \
             provide {directive}."
        ),
        Spread::Five => format!(
            "Based on how these five runes relate through their upright and reversed \
             positions, analyse the present situation, the challenge, the advice, the \
             support and the likely outcome, and provide {directive}."
        ),
        Spread::Nine => format!(
            "Based on where these nine runes fall among the nine realms of the World \
             Tree and whether each is upright or reversed, provide {directive}."
        ),
    }
}

/// Clause requesting cultural and historical background. The single-rune
/// clause names `first` when there is one.
pub fn history(spread: Spread, first: Option<&Card>) -> String {
    match (spread, first) {
        (Spread::Single, Some(card)) => format!(
            "{HISTORY_MARKER} on the {} rune and related stories from Norse mythology.",
            card.name
        ),
        (Spread::Single, None) => format!(
            "{HISTORY_MARKER} on this rune and related stories from Norse mythology."
        ),
        (Spread::Three, _) => format!(
            "{HISTORY_MARKER} on these runes and related stories from Norse mythology, \
             especially how they interact to form a coherent narrative."
        ),
        (Spread::Five, _) => format!(
            "{HISTORY_MARKER} on these runes and related stories from Norse mythology, \
             especially how they interact within this cross layout."
        ),
        (Spread::Nine, _) => format!(
            "{HISTORY_MARKER} on these runes and related stories from Norse mythology, \
             especially how they interact across the nine realms of the World Tree."
        ),
    }
}

/// Persona and task for a spread reading.
pub fn spread_system_prompt(spread: Spread) -> &'static str {
    match spread {
        Spread::Single => {
            "You are an experienced rune reader, versed in Norse mythology and the \
             symbolism of the runes. Based on the rune the user drew and their question, \
             give a plain-spoken, approachable reading with cultural depth."
        }
        Spread::Three => {
            "You are an experienced rune reader, versed in Norse mythology and the \
             symbolism of the runes. Based on the three runes the user drew and their \
             question, trace the course of past, present and future and give a coherent \
             reading."
        }
        Spread::Five => {
            "You are an experienced rune reader, versed in Norse mythology and the \
             symbolism of the runes. Based on the five runes the user drew and their \
             question, analyse the present situation, challenge, advice, support and \
             likely outcome and give an insightful reading."
        }
        Spread::Nine => {
            "You are an experienced rune reader, versed in Norse mythology and the \
             symbolism of the runes. Based on where the user's nine runes fall among the \
             nine realms of the World Tree and their question, give a comprehensive and \
             profound reading."
        }
    }
}

/// Persona and task for the deck listing.
pub const TABLE_SYSTEM_PROMPT: &str = "You are an experienced rune reader. Organize the \
     rune information into a clear, readable format, grouped by category.";

/// Opening of the deck listing prompt.
pub const TABLE_INTRO: &str =
    "Please organize the following rune information into a clear, readable format:";

/// Closing of the deck listing prompt.
pub const TABLE_OUTRO: &str =
    "Group the runes by category and separate each group with a divider line.";
