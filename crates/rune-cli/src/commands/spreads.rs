use colored::Colorize;

use rune_oracle::{Method, Spread};

pub fn run() -> Result<(), String> {
    for spread in Spread::all() {
        println!(
            "  {} ({} rune{})",
            spread.title().bold(),
            spread.count(),
            if spread.count() == 1 { "" } else { "s" },
        );
        println!("  methods: {}", spread.tokens().join(", ").dimmed());
        for (i, label) in spread.labels().iter().enumerate() {
            println!("    {}. {label}", i + 1);
        }
        println!();
    }

    println!("  {}", "Deck table".bold());
    println!(
        "  methods: {}",
        Method::table_tokens().join(", ").dimmed()
    );

    Ok(())
}
