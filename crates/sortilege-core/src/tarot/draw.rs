//! Drawing cards from stretched entropy.

use serde::{Deserialize, Serialize};

use crate::config::CastConfig;
use crate::entropy::{EntropyBlock, stretch};
use crate::error::CastResult;
use crate::seed::{Seed, resolve_timestamp};
use crate::tarot::deck::{Deck, TarotCard};
use crate::tarot::spread::SpreadSize;

/// Remove and return one deck position from the remaining pool,
/// selected by the block's big-endian prefix.
pub(crate) fn pick(block: &EntropyBlock, remaining: &mut Vec<usize>) -> usize {
    let index = (block.selection_value() % remaining.len() as u64) as usize;
    remaining.remove(index)
}

/// A card drawn for one spread position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card itself.
    pub card: TarotCard,
    /// Whether the card landed reversed.
    pub is_reversed: bool,
    /// Hex rendering of the slot's entropy block.
    pub digest: String,
}

/// A complete tarot reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotReading {
    /// The question asked.
    pub query: String,
    /// Moment of the drawing, RFC 3339 at second precision.
    pub timestamp: String,
    /// Hex rendering of the derived seed.
    pub seed: String,
    /// The spread that was laid out.
    pub spread: SpreadSize,
    /// The drawn cards, in spread position order.
    pub cards: Vec<DrawnCard>,
}

/// Draws spreads from the deck.
#[derive(Debug, Clone)]
pub struct DeckDrawer {
    pub(crate) deck: Deck,
    pub(crate) config: CastConfig,
    pub(crate) reversals: bool,
}

impl Default for DeckDrawer {
    fn default() -> Self {
        Self::new(CastConfig::default())
    }
}

impl DeckDrawer {
    /// Create a drawer over the standard deck with reversals enabled.
    pub fn new(config: CastConfig) -> Self {
        Self {
            deck: Deck::standard(),
            config,
            reversals: true,
        }
    }

    /// Enable or disable reversed cards. When disabled every card is
    /// drawn upright; the selection itself is unaffected.
    pub fn with_reversals(mut self, reversals: bool) -> Self {
        self.reversals = reversals;
        self
    }

    /// Draw a spread for the query at the current moment.
    pub fn draw(&self, query: &str, spread: SpreadSize) -> CastResult<TarotReading> {
        let timestamp = resolve_timestamp(None)?;
        self.perform(query, timestamp, spread)
    }

    /// Draw a spread for the query at an explicit RFC 3339 moment.
    ///
    /// The same query and timestamp always reproduce the same spread.
    pub fn draw_at(
        &self,
        query: &str,
        spread: SpreadSize,
        timestamp: &str,
    ) -> CastResult<TarotReading> {
        let timestamp = resolve_timestamp(Some(timestamp))?;
        self.perform(query, timestamp, spread)
    }

    fn perform(&self, query: &str, timestamp: String, spread: SpreadSize) -> CastResult<TarotReading> {
        let seed = Seed::derive(query, Some(&timestamp))?;
        let mut remaining: Vec<usize> = (0..self.deck.len()).collect();

        let cards = (0..spread.card_count())
            .map(|slot| {
                let block = stretch(&seed, &format!("card-{slot}"), &self.config);
                let position = pick(&block, &mut remaining);
                DrawnCard {
                    card: self.deck.card(position).clone(),
                    is_reversed: block.trailing_bit() && self.reversals,
                    digest: block.to_hex(),
                }
            })
            .collect();

        log::debug!("drew a {spread} spread for seed {}", seed.to_hex());

        Ok(TarotReading {
            query: query.to_string(),
            timestamp,
            seed: seed.to_hex(),
            spread,
            cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TS: &str = "2024-01-01T00:00:00+00:00";

    fn drawer() -> DeckDrawer {
        DeckDrawer::new(CastConfig::default().with_iterations(1000))
    }

    #[test]
    fn reference_single_card() {
        let reading = drawer().draw_at("Test", SpreadSize::Single, TS).unwrap();
        assert_eq!(
            reading.seed,
            "c3164cde3e5f6fb2d6966f690e4467ca6001d9ed467a94b968b9e736fd2fc591"
        );
        let card = &reading.cards[0];
        assert_eq!(card.card.name, "The High Priestess");
        assert_eq!(card.card.deck_position, 2);
        assert!(!card.is_reversed);
        assert_eq!(&card.digest[..8], "02773277");
    }

    #[test]
    fn reference_three_card_spread() {
        let reading = drawer().draw_at("Test", SpreadSize::ThreeCard, TS).unwrap();
        let summary: Vec<(usize, bool)> = reading
            .cards
            .iter()
            .map(|c| (c.card.deck_position, c.is_reversed))
            .collect();
        assert_eq!(summary, vec![(2, false), (67, true), (14, true)]);
        assert_eq!(reading.cards[1].card.name, "4 of Pentacles");
        assert_eq!(reading.cards[2].card.name, "Temperance");
        assert_eq!(&reading.cards[1].digest[..8], "a527d1f1");
        assert_eq!(&reading.cards[2].digest[..8], "82358676");
    }

    #[test]
    fn reference_celtic_cross() {
        let reading = drawer().draw_at("Test", SpreadSize::CelticCross, TS).unwrap();
        let positions: Vec<usize> = reading.cards.iter().map(|c| c.card.deck_position).collect();
        assert_eq!(positions, vec![2, 67, 14, 49, 54, 8, 73, 42, 68, 58]);
        let reversed: Vec<bool> = reading.cards.iter().map(|c| c.is_reversed).collect();
        assert_eq!(
            reversed,
            vec![false, true, true, true, true, false, true, true, false, true]
        );
    }

    #[test]
    fn no_position_repeats_within_a_spread() {
        let reading = drawer().draw_at("Test", SpreadSize::CelticCross, TS).unwrap();
        let positions: HashSet<usize> =
            reading.cards.iter().map(|c| c.card.deck_position).collect();
        assert_eq!(positions.len(), 10);
    }

    #[test]
    fn disabling_reversals_keeps_selection() {
        let upright = drawer()
            .with_reversals(false)
            .draw_at("Test", SpreadSize::ThreeCard, TS)
            .unwrap();
        assert!(upright.cards.iter().all(|c| !c.is_reversed));
        let with = drawer().draw_at("Test", SpreadSize::ThreeCard, TS).unwrap();
        let positions =
            |r: &TarotReading| r.cards.iter().map(|c| c.card.deck_position).collect::<Vec<_>>();
        assert_eq!(positions(&upright), positions(&with));
    }

    #[test]
    fn identical_inputs_identical_readings() {
        let a = drawer().draw_at("Test", SpreadSize::ThreeCard, TS).unwrap();
        let b = drawer().draw_at("Test", SpreadSize::ThreeCard, TS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seventy_eight_picks_exhaust_the_deck() {
        let seed = Seed::derive("Test", Some(TS)).unwrap();
        let config = CastConfig::default().with_iterations(50);
        let mut remaining: Vec<usize> = (0..78).collect();
        let mut taken = HashSet::new();
        for slot in 0..78 {
            let block = stretch(&seed, &format!("card-{slot}"), &config);
            taken.insert(pick(&block, &mut remaining));
        }
        assert!(remaining.is_empty());
        assert_eq!(taken.len(), 78);
    }

    #[test]
    fn reading_round_trips_through_json() {
        let reading = drawer().draw_at("Test", SpreadSize::ThreeCard, TS).unwrap();
        let json = serde_json::to_string(&reading).unwrap();
        let back: TarotReading = serde_json::from_str(&json).unwrap();
        assert_eq!(reading, back);
    }

    #[test]
    fn rejects_blank_queries_and_bad_timestamps() {
        assert!(drawer().draw_at(" ", SpreadSize::Single, TS).is_err());
        assert!(drawer().draw_at("fine", SpreadSize::Single, "soon").is_err());
    }
}
