pub mod hexagram;
pub mod pool;
pub mod tarot;

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use sortilege_core::{CastConfig, DerivationMethod};

use crate::persist;

/// Build the derivation configuration shared by all commands.
pub fn build_config(iterations: u32, digest: &str) -> Result<CastConfig, String> {
    let method = DerivationMethod::parse(digest).ok_or_else(|| {
        format!("unknown derivation method '{digest}' (expected pbkdf2 or iterated)")
    })?;
    Ok(CastConfig::default()
        .with_iterations(iterations)
        .with_method(method))
}

/// Persist a reading and report the outcome. In JSON mode the report
/// goes to stderr so stdout stays a clean document; a save failure is
/// reported but never fails the reading itself.
fn save_reading<T: Serialize>(path: &Path, reading: &T, json: bool) {
    match persist::save(path, reading) {
        Ok(()) => {
            let note = format!("{} Reading saved to {}", "✓".green(), path.display());
            if json {
                eprintln!("{note}");
            } else {
                println!("{note}");
            }
        }
        Err(e) => eprintln!("warning: failed to save reading: {e}"),
    }
}
