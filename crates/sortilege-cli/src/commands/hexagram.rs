use std::path::Path;

use colored::Colorize;

use sortilege_core::{CastConfig, HexagramCaster};

use crate::render;

pub fn run(
    query: &str,
    timestamp: Option<&str>,
    no_nuclear: bool,
    config: CastConfig,
    save: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let caster = HexagramCaster::new(config).with_nuclear(!no_nuclear);

    if !json {
        eprintln!("{}", "Consulting the oracle...".dimmed());
    }
    let reading = match timestamp {
        Some(ts) => caster.cast_at(query, ts),
        None => caster.cast(query),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let doc = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{doc}");
    } else {
        render::hexagram(&reading);
    }

    if let Some(path) = save {
        super::save_reading(path, &reading, json);
    }

    Ok(())
}
