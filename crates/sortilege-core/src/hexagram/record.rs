//! Resolved hexagram records.

use serde::{Deserialize, Serialize};

use crate::hexagram::pattern::Pattern;
use crate::hexagram::table;
use crate::trigram::Trigram;

/// The textual record attached to a cast hexagram.
///
/// Number 0 marks a synthetic record built for a trigram pair missing
/// from the catalogue; every other field is still populated so callers
/// never have to branch on presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    /// King Wen number, or 0 for a synthetic record.
    pub number: u8,
    /// Name of the hexagram.
    pub name: String,
    /// Chinese character(s), empty for a synthetic record.
    pub chinese: String,
    /// The Judgement text.
    pub judgement: String,
    /// The Image text.
    pub image: String,
    /// Per-line texts, bottom to top; empty for a synthetic record.
    pub lines: Vec<String>,
}

impl HexagramRecord {
    /// Resolve the record for a pattern's trigram pair.
    pub fn resolve(pattern: &Pattern) -> Self {
        let lower = pattern.lower();
        let upper = pattern.upper();
        match table::lookup(lower, upper) {
            Some(entry) => Self {
                number: entry.number,
                name: entry.name.to_string(),
                chinese: entry.chinese.to_string(),
                judgement: entry.judgement.to_string(),
                image: entry.image.to_string(),
                lines: entry.lines.iter().map(|line| line.to_string()).collect(),
            },
            None => {
                log::warn!(
                    "no catalogue entry for {} over {}",
                    upper.glyph(),
                    lower.glyph()
                );
                Self::fallback(lower, upper)
            }
        }
    }

    /// Synthetic record for a trigram pair missing from the catalogue.
    fn fallback(lower: Trigram, upper: Trigram) -> Self {
        Self {
            number: 0,
            name: format!("{} over {}", upper.name(), lower.name()),
            chinese: String::new(),
            judgement: "Information not available.".to_string(),
            image: format!("{} above {}.", upper.image_phrase(), lower.image_phrase()),
            lines: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_trigram_pair_resolves_to_a_distinct_hexagram() {
        let mut numbers = HashSet::new();
        let mut names = HashSet::new();
        for bits in 0u8..64 {
            let pattern = Pattern::new([
                bits & 1,
                (bits >> 1) & 1,
                (bits >> 2) & 1,
                (bits >> 3) & 1,
                (bits >> 4) & 1,
                (bits >> 5) & 1,
            ]);
            let record = HexagramRecord::resolve(&pattern);
            assert!((1..=64).contains(&record.number));
            assert!(!record.judgement.is_empty());
            assert!(!record.image.is_empty());
            assert_eq!(record.lines.len(), 6);
            numbers.insert(record.number);
            names.insert(record.name.clone());
        }
        assert_eq!(numbers.len(), 64);
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn missing_pair_falls_back_to_a_synthetic_record() {
        let record = HexagramRecord::fallback(Trigram::Thunder, Trigram::Mountain);
        assert_eq!(record.number, 0);
        assert_eq!(
            record.name,
            "Gen (Mountain/Keeping Still) over Zhen (Thunder/Arousing)"
        );
        assert_eq!(record.chinese, "");
        assert_eq!(record.judgement, "Information not available.");
        assert_eq!(
            record.image,
            "Mountain keeps still above Thunder arouses and stirs."
        );
        assert!(record.lines.is_empty());
    }

    #[test]
    fn known_pairs() {
        let creative = HexagramRecord::resolve(&Pattern::new([1, 1, 1, 1, 1, 1]));
        assert_eq!(creative.number, 1);
        assert_eq!(creative.chinese, "乾");

        let receptive = HexagramRecord::resolve(&Pattern::new([0, 0, 0, 0, 0, 0]));
        assert_eq!(receptive.number, 2);
        assert_eq!(receptive.chinese, "坤");
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = HexagramRecord::resolve(&Pattern::new([0, 1, 0, 0, 1, 1]));
        let json = serde_json::to_string(&record).unwrap();
        let back: HexagramRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
