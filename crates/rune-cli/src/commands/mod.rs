pub mod draw;
pub mod list;
pub mod show;
pub mod spreads;
pub mod table;

use std::path::Path;
use std::sync::Arc;

use rune_core::Deck;
use rune_oracle::{InterpretationDepth, ReadingConfig};

/// Reading options from the command line, layered over the config file.
pub struct ReadingArgs<'a> {
    pub config: Option<&'a Path>,
    pub depth: Option<&'a str>,
    pub no_history: bool,
    pub seed: Option<u64>,
}

/// Load the deck from `path`, or the built-in deck. Any failure is fatal.
fn load_deck(path: Option<&Path>) -> Result<Arc<Deck>, String> {
    let deck = match path {
        Some(path) => Deck::load(path),
        None => Deck::builtin(),
    }
    .map_err(|e| e.to_string())?;
    Ok(Arc::new(deck))
}

/// Defaults, then the config file, then flags and environment.
fn reading_config(args: &ReadingArgs<'_>) -> Result<ReadingConfig, String> {
    let mut config = match args.config {
        Some(path) => ReadingConfig::load(path).map_err(|e| e.to_string())?,
        None => ReadingConfig::default(),
    };

    if let Some(depth) = args.depth {
        config = config.with_depth(InterpretationDepth::parse(depth).map_err(|e| e.to_string())?);
    }
    if args.no_history {
        config = config.with_history(false);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    tracing::debug!(?config, "resolved reading config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ReadingArgs<'static> {
        ReadingArgs {
            config: None,
            depth: None,
            no_history: false,
            seed: None,
        }
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(reading_config(&args()).unwrap(), ReadingConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "interpretation_depth": "concise", "include_history": true, "seed": 1 }"#,
        )
        .unwrap();

        let args = ReadingArgs {
            config: Some(&path),
            depth: Some("deep"),
            no_history: true,
            seed: Some(9),
        };
        let config = reading_config(&args).unwrap();
        assert_eq!(config.depth, InterpretationDepth::Deep);
        assert!(!config.include_history);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn file_applies_when_flags_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "interpretation_depth": "concise" }"#).unwrap();

        let args = ReadingArgs {
            config: Some(&path),
            ..args()
        };
        let config = reading_config(&args).unwrap();
        assert_eq!(config.depth, InterpretationDepth::Concise);
        assert!(config.include_history);
    }

    #[test]
    fn bad_depth_flag_is_an_error() {
        let args = ReadingArgs {
            depth: Some("epic"),
            ..args()
        };
        assert!(reading_config(&args).unwrap_err().contains("epic"));
    }

    #[test]
    fn builtin_deck_loads() {
        assert_eq!(load_deck(None).unwrap().len(), 24);
    }

    #[test]
    fn missing_deck_file_is_an_error() {
        let err = load_deck(Some(Path::new("/nonexistent/deck.json"))).unwrap_err();
        assert!(err.contains("cannot read deck file"));
    }
}
