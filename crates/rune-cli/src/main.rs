//! CLI frontend for Runecast rune readings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::ReadingArgs;

#[derive(Parser)]
#[command(
    name = "runes",
    about = "Runecast — draw runes and compose readings for an interpreter",
    version,
    propagate_version = true
)]
struct Cli {
    /// Deck file (JSON); defaults to the built-in Elder Futhark deck
    #[arg(long, global = true, env = "RUNES_DECK")]
    deck: Option<PathBuf>,

    /// Reading config file (JSON)
    #[arg(long, global = true, env = "RUNES_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a spread and compose the interpretation request
    Draw {
        /// Method: single, three, five, nine, or table
        method: String,

        /// Question to ask (default: guidance about the future)
        question: Vec<String>,

        /// Interpretation depth: concise, detailed, deep
        #[arg(long, env = "RUNES_DEPTH")]
        depth: Option<String>,

        /// Do not ask for historical and mythological background
        #[arg(
            long,
            env = "RUNES_NO_HISTORY",
            value_parser = clap::builder::FalseyValueParser::new()
        )]
        no_history: bool,

        /// RNG seed for a reproducible draw
        #[arg(short, long, env = "RUNES_SEED")]
        seed: Option<u64>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose the request that lists every rune
    Table {
        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },

    /// List runes in the deck
    List {
        /// Only runes in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one rune in detail
    Show {
        /// Rune name (case-insensitive)
        name: String,
    },

    /// List the available spreads and their positions
    Spreads,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let deck = cli.deck.as_deref();

    let result = match cli.command {
        Commands::Draw {
            method,
            question,
            depth,
            no_history,
            seed,
            json,
        } => {
            let args = ReadingArgs {
                config: cli.config.as_deref(),
                depth: depth.as_deref(),
                no_history,
                seed,
            };
            let question = question.join(" ");
            commands::draw::run(deck, &args, &method, &question, json)
        }
        Commands::Table { json } => commands::table::run(deck, json),
        Commands::List { category } => commands::list::run(deck, category.as_deref()),
        Commands::Show { name } => commands::show::run(deck, &name),
        Commands::Spreads => commands::spreads::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
