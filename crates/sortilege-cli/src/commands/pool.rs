use std::io::{self, BufRead, Write};

use colored::Colorize;

use sortilege_core::{CastConfig, DeckDrawer, SpreadSize};

use crate::render;

/// Shortest prefix accepted when picking from the pool.
const MIN_PREFIX_LEN: usize = 3;

pub fn run(
    query: &str,
    spread: u32,
    reversals: bool,
    config: CastConfig,
) -> Result<(), String> {
    let spread = SpreadSize::from_count(spread).map_err(|e| e.to_string())?;
    let drawer = DeckDrawer::new(config).with_reversals(reversals);

    eprintln!("{}", "Preparing the deck...".dimmed());
    let mut pool = drawer
        .confirmation_pool_with_progress(query, |generated, total| {
            eprint!("\r{}", format!("Calculating hash {generated}/{total}...").dimmed());
        })
        .map_err(|e| e.to_string())?;
    eprintln!();

    println!(
        "The deck is ready. Choose {} of {} hashes to reveal your cards.",
        spread.card_count(),
        pool.len()
    );
    println!();
    render::pool_labels(&pool);

    print!(
        "\nEnter {} hash prefixes ({MIN_PREFIX_LEN}+ chars), separated by commas: ",
        spread.card_count()
    );
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    let choices: Vec<String> = line
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    if choices.len() != spread.card_count() {
        return Err(format!(
            "expected {} comma-separated prefixes, got {}",
            spread.card_count(),
            choices.len()
        ));
    }
    if let Some(short) = choices.iter().find(|c| c.len() < MIN_PREFIX_LEN) {
        return Err(format!(
            "hash prefixes must be at least {MIN_PREFIX_LEN} characters long: '{short}'"
        ));
    }

    println!("\n{}", "--- Your Revealed Cards ---".bold());
    let labels = spread.position_labels();
    let mut revealed = Vec::with_capacity(choices.len());
    for (index, choice) in choices.iter().enumerate() {
        let entry = pool.reveal(choice).map_err(|e| e.to_string())?;
        render::revealed_card(index, labels[index], choice, &entry);
        revealed.push(entry);
    }

    println!();
    render::pool_summary(query, labels, &revealed);

    Ok(())
}
