use std::path::Path;

use colored::Colorize;

use rune_oracle::find_rune;

pub fn run(deck: Option<&Path>, name: &str) -> Result<(), String> {
    let deck = super::load_deck(deck)?;
    let card = find_rune(&deck, name).map_err(|e| e.to_string())?;

    println!(
        "  {} {} [{}]",
        card.symbol,
        card.name.bold(),
        card.english_name.dimmed()
    );
    println!();
    println!("  category: {}", card.category);
    if !card.keywords.is_empty() {
        println!("  keywords: {}", card.keywords.join(", "));
    }
    println!();
    println!("  {}", "Upright".bold());
    println!("  {}", card.meaning);
    println!();
    println!("  {}", "Reversed".bold());
    println!("  {}", card.reversed_meaning);

    Ok(())
}
