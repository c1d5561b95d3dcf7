use std::path::Path;

use rune_oracle::compose::table_request;

pub fn run(deck: Option<&Path>, json: bool) -> Result<(), String> {
    let deck = super::load_deck(deck)?;
    let request = table_request(&deck);

    if json {
        let out = serde_json::to_string_pretty(&request)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        super::draw::print_request(&request);
    }

    Ok(())
}
