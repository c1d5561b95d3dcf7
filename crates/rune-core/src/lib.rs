//! Core types for Runecast: runes, the deck, and the deck store.
//!
//! This crate defines the data model every reading is drawn from. It is
//! independent of sampling and prompt composition — you can construct a
//! [`Deck`] programmatically, load one from a JSON file, or use the built-in
//! Elder Futhark deck.

/// A single rune record.
pub mod card;
/// The ordered, read-only collection of runes and its loaders.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;

/// Re-export the rune record.
pub use card::Card;
/// Re-export deck types.
pub use deck::{Deck, MIN_DECK_SIZE};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
