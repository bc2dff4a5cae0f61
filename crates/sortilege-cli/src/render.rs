use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sortilege_core::{ConfirmationPool, HexagramReading, HexagramRecord, PoolEntry, TarotReading};

/// Columns of bracketed labels when printing the pool.
const LABEL_COLUMNS: usize = 4;

pub fn hexagram(reading: &HexagramReading) {
    println!("{}", "☯ Hexagram Casting".bold().cyan());
    println!("{} {}", "Query:".dimmed(), reading.query);
    println!("{} {}", "Time:".dimmed(), reading.timestamp);
    println!("{} {}…", "Seed:".dimmed(), &reading.seed[..16]);
    println!("{} {}", "Cast:".dimmed(), reading.cast_id.green().bold());
    println!();

    let mut table = record_table("Primary Hexagram", &reading.primary_record);
    table.add_row(vec![
        "Lines".to_string(),
        line_art(reading.primary.bits(), &reading.moving_positions).join("\n"),
    ]);
    let upper = reading.primary.upper();
    let lower = reading.primary.lower();
    table.add_row(vec![
        "Trigrams".to_string(),
        format!(
            "{} {}: {}\n{} {}: {}",
            upper.glyph(),
            upper.name(),
            upper.attributes(),
            lower.glyph(),
            lower.name(),
            lower.attributes()
        ),
    ]);
    add_texts(&mut table, &reading.primary_record);
    println!("{table}");

    if !reading.moving_positions.is_empty() {
        let positions: Vec<String> = reading
            .moving_positions
            .iter()
            .map(|p| (p + 1).to_string())
            .collect();
        println!();
        println!(
            "{} {}",
            "Moving lines:".yellow().bold(),
            positions.join(", ")
        );
        for (position, text) in reading.moving_positions.iter().zip(&reading.moving_line_texts) {
            println!("  {} {text}", format!("Line {}:", position + 1).yellow());
        }
    }

    if let (Some(pattern), Some(record)) = (&reading.relating, &reading.relating_record) {
        println!();
        let mut table = record_table("Relating Hexagram", record);
        table.add_row(vec![
            "Lines".to_string(),
            line_art(pattern.bits(), &[]).join("\n"),
        ]);
        add_texts(&mut table, record);
        println!("{table}");
    }

    if let Some(record) = &reading.nuclear_record {
        println!();
        let mut table = record_table("Nuclear Hexagram", record);
        table.add_row(vec![
            "Formed by".to_string(),
            "the four inner lines (2-5) of the primary".to_string(),
        ]);
        table.add_row(vec!["Judgement".to_string(), record.judgement.clone()]);
        println!("{table}");
    }
}

fn record_table(title: &str, record: &HexagramRecord) -> Table {
    let mut heading = if record.number == 0 {
        record.name.clone()
    } else {
        format!("#{} {}", record.number, record.name)
    };
    if !record.chinese.is_empty() {
        heading = format!("{heading}  {}", record.chinese);
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![title.to_string(), heading]);
    table
}

fn add_texts(table: &mut Table, record: &HexagramRecord) {
    table.add_row(vec!["Judgement".to_string(), record.judgement.clone()]);
    table.add_row(vec!["Image".to_string(), record.image.clone()]);
}

/// Render the six lines top to bottom, marking moving positions.
fn line_art(bits: [u8; 6], moving: &[usize]) -> Vec<String> {
    (0..6)
        .rev()
        .map(|position| {
            let mut art = if bits[position] == 1 {
                "━━━━━━━".to_string()
            } else {
                "━━   ━━".to_string()
            };
            if moving.contains(&position) {
                art.push_str(" ✦");
            }
            art
        })
        .collect()
}

pub fn tarot(reading: &TarotReading) {
    println!("{}", "☯ Tarot Reading".bold().cyan());
    println!("{} {}", "Query:".dimmed(), reading.query);
    println!("{} {}", "Time:".dimmed(), reading.timestamp);
    println!("{} {}…", "Seed:".dimmed(), &reading.seed[..16]);
    println!("{} {}", "Spread:".dimmed(), reading.spread);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Orientation", "Hash"]);
    for (label, drawn) in reading.spread.position_labels().iter().zip(&reading.cards) {
        table.add_row(vec![
            label.to_string(),
            drawn.card.name.clone(),
            orientation(drawn.is_reversed).to_string(),
            drawn.digest[..8].to_string(),
        ]);
    }
    println!("{table}");
}

pub fn pool_labels(pool: &ConfirmationPool) {
    let labels = pool.labels();
    for row in labels.chunks(LABEL_COLUMNS) {
        let cells: Vec<String> = row.iter().map(|label| format!("[{label}]")).collect();
        println!("{}", cells.join("  "));
    }
}

pub fn revealed_card(index: usize, position: &str, choice: &str, entry: &PoolEntry) {
    let orientation = if entry.is_reversed {
        "Reversed".red()
    } else {
        "Upright".green()
    };
    println!(
        "Card #{} ({}): {position}: {} - {orientation}",
        index + 1,
        choice.yellow(),
        entry.card.name.bold()
    );
}

pub fn pool_summary(query: &str, positions: &[&str], revealed: &[PoolEntry]) {
    println!("{} {query}", "Overview for:".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Orientation", "Hash"]);
    for (position, entry) in positions.iter().zip(revealed) {
        table.add_row(vec![
            position.to_string(),
            entry.card.name.clone(),
            orientation(entry.is_reversed).to_string(),
            entry.label().to_string(),
        ]);
    }
    println!("{table}");
}

fn orientation(is_reversed: bool) -> &'static str {
    if is_reversed { "Reversed" } else { "Upright" }
}
