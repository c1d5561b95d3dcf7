//! Configuration for readings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};

/// How much interpretation to ask the delegate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationDepth {
    /// A brief reading.
    Concise,
    /// A detailed reading.
    #[default]
    Detailed,
    /// An in-depth reading.
    Deep,
}

impl InterpretationDepth {
    /// Parse a depth from a user-supplied string.
    pub fn parse(s: &str) -> OracleResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "concise" | "brief" | "short" => Ok(Self::Concise),
            "detailed" | "normal" => Ok(Self::Detailed),
            "deep" | "in-depth" | "indepth" => Ok(Self::Deep),
            _ => Err(OracleError::InvalidDepth(s.to_string())),
        }
    }

    /// The verbosity directive used in the prompt's instruction clause.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Concise => "a brief interpretation",
            Self::Detailed => "a detailed interpretation",
            Self::Deep => "an in-depth interpretation",
        }
    }

    /// All depths from shortest to longest.
    pub fn all() -> &'static [Self] {
        &[Self::Concise, Self::Detailed, Self::Deep]
    }
}

impl std::fmt::Display for InterpretationDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concise => write!(f, "concise"),
            Self::Detailed => write!(f, "detailed"),
            Self::Deep => write!(f, "deep"),
        }
    }
}

impl std::str::FromStr for InterpretationDepth {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Configuration for a reading.
///
/// Loadable from a JSON file:
///
/// ```text
/// {
///     "interpretation_depth": "deep",
///     "include_history": false,
///     "seed": 7
/// }
/// ```
///
/// Every key is optional; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Verbosity directive for the prompt.
    #[serde(rename = "interpretation_depth")]
    pub depth: InterpretationDepth,
    /// Whether the prompt asks for historical and mythological background.
    pub include_history: bool,
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            depth: InterpretationDepth::Detailed,
            include_history: true,
            seed: None,
        }
    }
}

impl ReadingConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> OracleResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| OracleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded reading config");
        Ok(config)
    }

    /// Set the interpretation depth.
    pub fn with_depth(mut self, depth: InterpretationDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Set whether to request historical background.
    pub fn with_history(mut self, include_history: bool) -> Self {
        self.include_history = include_history;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
