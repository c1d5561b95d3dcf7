//! Error types for readings.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while resolving, drawing, or configuring a reading.
///
/// Display strings are short corrective messages meant to be shown to the
/// user as-is.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No method token was given.
    #[error("please choose a method: single/three/five/nine/table (e.g. `single what does today hold`)")]
    MissingMethod,

    /// The method token is not a known spread.
    #[error("invalid method \"{token}\"{}, use: single/three/five/nine/table", suggestion_hint(.suggestion))]
    InvalidMethod {
        /// The token as given.
        token: String,
        /// The closest known token, if one is similar enough.
        suggestion: Option<String>,
    },

    /// A draw asked for more runes than the deck holds.
    #[error("cannot draw {requested} runes from a deck of {available}")]
    DeckTooSmall {
        /// Runes requested.
        requested: usize,
        /// Runes in the deck.
        available: usize,
    },

    /// No rune with that name is in the deck.
    #[error("no rune named \"{name}\"{}", suggestions_hint(.suggestions))]
    UnknownRune {
        /// The name as given.
        name: String,
        /// Close rune names, best first.
        suggestions: Vec<String>,
    },

    /// Unknown interpretation depth.
    #[error("invalid interpretation depth \"{0}\", use: concise/detailed/deep")]
    InvalidDepth(String),

    /// The configuration file could not be read.
    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is malformed.
    #[error("malformed config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Deck error.
    #[error("{0}")]
    Core(#[from] rune_core::CoreError),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{s}\"?)"),
        None => String::new(),
    }
}

fn suggestions_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}
