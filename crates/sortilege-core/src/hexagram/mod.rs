//! Hexagram casting.
//!
//! A casting stretches the seed into six line slots plus an identifier
//! slot, reads each line off its block, and resolves the resulting
//! patterns against the King Wen catalogue. Moving lines produce a
//! relating hexagram; the four inner lines always define a nuclear one.

mod cast;
mod line;
mod pattern;
mod record;
pub mod table;

pub use cast::{HexagramCaster, HexagramReading};
pub use line::Line;
pub use pattern::Pattern;
pub use record::HexagramRecord;
