use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

/// Save a reading as JSON. A `.jsonl` path appends one compact object
/// per line; any other path is overwritten with a pretty document.
pub fn save<T: Serialize>(path: &Path, reading: &T) -> Result<(), String> {
    let appends = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    if appends {
        let line = serde_json::to_string(reading).map_err(|e| e.to_string())?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
        writeln!(file, "{line}").map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    } else {
        let doc = serde_json::to_string_pretty(reading).map_err(|e| e.to_string())?;
        fs::write(path, doc + "\n").map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    }
    Ok(())
}
