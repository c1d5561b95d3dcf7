use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(deck: Option<&Path>, category: Option<&str>) -> Result<(), String> {
    let deck = super::load_deck(deck)?;

    let categories: Vec<&str> = match category {
        Some(wanted) => deck
            .categories()
            .into_iter()
            .filter(|c| c.eq_ignore_ascii_case(wanted.trim()))
            .collect(),
        None => deck.categories(),
    };

    if categories.is_empty() {
        println!("  No runes found.");
        return Ok(());
    }

    let mut total = 0;
    for category in categories {
        let runes = deck.by_category(category);
        total += runes.len();

        println!("  {}", category.bold());

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Rune", "Name", "Meaning", "Keywords"]);
        for card in runes {
            let name = format!("{} ({})", card.name, card.english_name);
            table.add_row(vec![
                card.symbol.clone(),
                name,
                card.meaning.clone(),
                card.keywords.join(", "),
            ]);
        }
        println!("{table}");
        println!();
    }

    println!("  {total} runes");

    Ok(())
}
