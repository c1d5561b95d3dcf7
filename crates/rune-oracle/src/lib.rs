//! Rune readings: spread selection, drawing, and prompt composition.
//!
//! Resolves a method token to a spread, draws runes uniformly without
//! replacement with independent orientations, and composes a plain summary
//! plus a request for an external text generator to interpret.

pub mod compose;
pub mod config;
pub mod diviner;
pub mod draw;
pub mod error;
pub mod lookup;
pub mod spread;

pub use compose::{DEFAULT_QUESTION, InterpretationRequest};
pub use config::{InterpretationDepth, ReadingConfig};
pub use diviner::{Diviner, PlacedRune, Reading, SpreadReading};
pub use draw::{Draw, DrawnRune, Orientation};
pub use error::{OracleError, OracleResult};
pub use lookup::find_rune;
pub use spread::{Method, Spread};
