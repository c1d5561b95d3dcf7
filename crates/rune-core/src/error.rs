use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading a deck.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The deck file could not be read.
    #[error("cannot read deck file {}: {source}", .path.display())]
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The deck document does not match the expected schema.
    #[error("malformed deck data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The deck holds fewer runes than the largest spread needs.
    #[error("deck has {found} runes but at least {required} are required")]
    DeckTooSmall {
        /// Number of runes in the loaded deck.
        found: usize,
        /// Minimum number of runes a deck must hold.
        required: usize,
    },
}
