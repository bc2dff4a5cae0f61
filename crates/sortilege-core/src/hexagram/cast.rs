//! Casting: from question to complete hexagram reading.

use serde::{Deserialize, Serialize};

use crate::config::CastConfig;
use crate::entropy::stretch;
use crate::error::CastResult;
use crate::hexagram::line::Line;
use crate::hexagram::pattern::Pattern;
use crate::hexagram::record::HexagramRecord;
use crate::seed::{Seed, resolve_timestamp};

/// Hex characters kept as the cast identifier.
const CAST_ID_LEN: usize = 8;

/// Casts hexagrams from questions.
#[derive(Debug, Clone)]
pub struct HexagramCaster {
    config: CastConfig,
    include_nuclear: bool,
}

impl Default for HexagramCaster {
    fn default() -> Self {
        Self::new(CastConfig::default())
    }
}

impl HexagramCaster {
    /// Create a caster with the given derivation configuration.
    pub fn new(config: CastConfig) -> Self {
        Self {
            config,
            include_nuclear: true,
        }
    }

    /// Enable or disable the nuclear hexagram in produced readings.
    pub fn with_nuclear(mut self, include: bool) -> Self {
        self.include_nuclear = include;
        self
    }

    /// Cast a hexagram for the query at the current moment.
    pub fn cast(&self, query: &str) -> CastResult<HexagramReading> {
        let timestamp = resolve_timestamp(None)?;
        self.perform(query, timestamp)
    }

    /// Cast a hexagram for the query at an explicit RFC 3339 moment.
    ///
    /// The same query and timestamp always reproduce the same reading.
    pub fn cast_at(&self, query: &str, timestamp: &str) -> CastResult<HexagramReading> {
        let timestamp = resolve_timestamp(Some(timestamp))?;
        self.perform(query, timestamp)
    }

    fn perform(&self, query: &str, timestamp: String) -> CastResult<HexagramReading> {
        let seed = Seed::derive(query, Some(&timestamp))?;

        // Six lines, bottom to top, each from its own entropy slot.
        let lines: [Line; 6] = std::array::from_fn(|slot| {
            Line::from_block(&stretch(&seed, &format!("line-{slot}"), &self.config))
        });
        let moving_positions: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_moving())
            .map(|(position, _)| position)
            .collect();

        let cast_id = stretch(&seed, "hexagram-id", &self.config).to_hex()[..CAST_ID_LEN]
            .to_string();

        let primary = Pattern::from_lines(&lines);
        let primary_record = HexagramRecord::resolve(&primary);
        let moving_line_texts: Vec<String> = moving_positions
            .iter()
            .filter_map(|&position| primary_record.lines.get(position).cloned())
            .collect();

        let relating = (!moving_positions.is_empty()).then(|| primary.with_flipped(&moving_positions));
        let relating_record = relating.as_ref().map(HexagramRecord::resolve);

        let nuclear = self.include_nuclear.then(|| primary.nuclear());
        let nuclear_record = nuclear.as_ref().map(HexagramRecord::resolve);

        log::debug!(
            "cast {cast_id}: hexagram {} with {} moving line(s)",
            primary_record.number,
            moving_positions.len()
        );

        Ok(HexagramReading {
            query: query.to_string(),
            timestamp,
            seed: seed.to_hex(),
            cast_id,
            lines,
            primary,
            primary_record,
            moving_positions,
            moving_line_texts,
            relating,
            relating_record,
            nuclear,
            nuclear_record,
        })
    }
}

/// A complete hexagram reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexagramReading {
    /// The question asked.
    pub query: String,
    /// Moment of the casting, RFC 3339 at second precision.
    pub timestamp: String,
    /// Hex rendering of the derived seed.
    pub seed: String,
    /// Short identifier derived from the dedicated identifier slot.
    pub cast_id: String,
    /// The six cast lines, bottom to top.
    pub lines: [Line; 6],
    /// Binary shape of the primary hexagram.
    pub primary: Pattern,
    /// Catalogue record for the primary hexagram.
    pub primary_record: HexagramRecord,
    /// Positions (0-5, bottom up) of moving lines, ascending.
    pub moving_positions: Vec<usize>,
    /// Texts of the moving lines, in position order.
    pub moving_line_texts: Vec<String>,
    /// Shape of the relating hexagram, present when lines move.
    pub relating: Option<Pattern>,
    /// Record for the relating hexagram, present when lines move.
    pub relating_record: Option<HexagramRecord>,
    /// Shape of the nuclear hexagram, unless disabled.
    pub nuclear: Option<Pattern>,
    /// Record for the nuclear hexagram, unless disabled.
    pub nuclear_record: Option<HexagramRecord>,
}
