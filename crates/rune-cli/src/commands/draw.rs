use std::path::Path;

use colored::Colorize;

use rune_oracle::{Diviner, InterpretationRequest, Reading};

use super::ReadingArgs;

pub fn run(
    deck: Option<&Path>,
    args: &ReadingArgs<'_>,
    method: &str,
    question: &str,
    json: bool,
) -> Result<(), String> {
    let deck = super::load_deck(deck)?;
    let config = super::reading_config(args)?;
    let mut diviner = Diviner::new(deck, config);

    let question = (!question.trim().is_empty()).then_some(question);
    let reading = diviner
        .divine(method, question)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&reading)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if let Reading::Spread(spread_reading) = &reading {
        for line in spread_reading.summary.lines() {
            println!("  {line}");
        }
        println!();
        println!("  {}", "Interpreting...".dimmed());
        println!();
    }
    print_request(reading.request());

    Ok(())
}

/// Print a request as two labelled sections.
pub fn print_request(request: &InterpretationRequest) {
    println!("{}", "--- system ---".bold());
    println!("{}", request.system_prompt);
    println!();
    println!("{}", "--- prompt ---".bold());
    println!("{}", request.prompt);
}
