use std::path::Path;

use colored::Colorize;

use sortilege_core::{CastConfig, DeckDrawer, SpreadSize};

use crate::render;

pub fn run(
    query: &str,
    spread: u32,
    no_reversals: bool,
    timestamp: Option<&str>,
    config: CastConfig,
    save: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let spread = SpreadSize::from_count(spread).map_err(|e| e.to_string())?;
    let drawer = DeckDrawer::new(config).with_reversals(!no_reversals);

    if !json {
        eprintln!("{}", "Shuffling the deck...".dimmed());
    }
    let reading = match timestamp {
        Some(ts) => drawer.draw_at(query, spread, ts),
        None => drawer.draw(query, spread),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let doc = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{doc}");
    } else {
        render::tarot(&reading);
    }

    if let Some(path) = save {
        super::save_reading(path, &reading, json);
    }

    Ok(())
}
