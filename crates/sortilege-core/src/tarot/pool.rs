//! The interactive confirmation pool.
//!
//! Instead of drawing directly, a querent may generate the full deck as
//! a pool of hash-labelled face-down cards and pick by hash prefix. The
//! seed comes from the query alone, so the same question always lays
//! out the same pool regardless of when it is consulted.

use crate::config::CastConfig;
use crate::entropy::stretch;
use crate::error::{CastError, CastResult};
use crate::seed::Seed;
use crate::tarot::deck::{Deck, TarotCard};
use crate::tarot::draw::{DeckDrawer, pick};

/// Hex characters shown as a pool entry's label.
const LABEL_LEN: usize = 8;

/// One face-down card in the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    /// Full hex digest of the slot's entropy block.
    pub digest: String,
    /// The card hidden behind this entry.
    pub card: TarotCard,
    /// Whether the card lies reversed.
    pub is_reversed: bool,
}

impl PoolEntry {
    /// The short label the querent picks by.
    pub fn label(&self) -> &str {
        &self.digest[..LABEL_LEN]
    }
}

/// A deck laid out as hash-labelled entries, in generation order.
///
/// With reversals enabled every card appears twice, so the pool holds
/// 156 entries instead of 78; orientation still comes from each entry's
/// own entropy block.
#[derive(Debug, Clone)]
pub struct ConfirmationPool {
    entries: Vec<PoolEntry>,
}

impl ConfirmationPool {
    /// Lay out the pool for a query.
    pub fn prepare(
        deck: &Deck,
        query: &str,
        config: &CastConfig,
        reversals: bool,
    ) -> CastResult<Self> {
        Self::prepare_with_progress(deck, query, config, reversals, |_, _| {})
    }

    /// Lay out the pool, reporting each generated entry to the callback
    /// as (generated, total).
    pub fn prepare_with_progress<F>(
        deck: &Deck,
        query: &str,
        config: &CastConfig,
        reversals: bool,
        mut progress: F,
    ) -> CastResult<Self>
    where
        F: FnMut(usize, usize),
    {
        let seed = Seed::derive(query, None)?;
        let mut remaining: Vec<usize> = if reversals {
            (0..deck.len()).chain(0..deck.len()).collect()
        } else {
            (0..deck.len()).collect()
        };

        let total = remaining.len();
        let entries = (0..total)
            .map(|slot| {
                let block = stretch(&seed, &format!("card-{slot}"), config);
                let position = pick(&block, &mut remaining);
                progress(slot + 1, total);
                PoolEntry {
                    digest: block.to_hex(),
                    card: deck.card(position).clone(),
                    is_reversed: block.trailing_bit() && reversals,
                }
            })
            .collect();

        Ok(Self { entries })
    }

    /// Number of entries still face down.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether every entry has been revealed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels of the remaining entries, in pool order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(PoolEntry::label).collect()
    }

    /// Find the single entry whose label starts with the prefix.
    pub fn resolve(&self, prefix: &str) -> CastResult<&PoolEntry> {
        let needle = prefix.to_lowercase();
        let mut matches = self
            .entries
            .iter()
            .filter(|entry| entry.label().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (Some(_), Some(_)) => Err(CastError::AmbiguousPrefix(prefix.to_string())),
            (None, _) => Err(CastError::NoMatchingPrefix(prefix.to_string())),
        }
    }

    /// Reveal the single entry whose label starts with the prefix,
    /// removing it from the pool.
    pub fn reveal(&mut self, prefix: &str) -> CastResult<PoolEntry> {
        let needle = prefix.to_lowercase();
        let mut indices = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.label().starts_with(&needle))
            .map(|(index, _)| index);
        match (indices.next(), indices.next()) {
            (Some(index), None) => Ok(self.entries.remove(index)),
            (Some(_), Some(_)) => Err(CastError::AmbiguousPrefix(prefix.to_string())),
            (None, _) => Err(CastError::NoMatchingPrefix(prefix.to_string())),
        }
    }
}

impl DeckDrawer {
    /// Lay out the confirmation pool for a query using this drawer's
    /// deck and configuration.
    pub fn confirmation_pool(&self, query: &str) -> CastResult<ConfirmationPool> {
        ConfirmationPool::prepare(&self.deck, query, &self.config, self.reversals)
    }

    /// Like [`confirmation_pool`](Self::confirmation_pool), reporting
    /// each generated entry to the callback as (generated, total).
    pub fn confirmation_pool_with_progress<F>(
        &self,
        query: &str,
        progress: F,
    ) -> CastResult<ConfirmationPool>
    where
        F: FnMut(usize, usize),
    {
        ConfirmationPool::prepare_with_progress(
            &self.deck,
            query,
            &self.config,
            self.reversals,
            progress,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn pool(reversals: bool) -> ConfirmationPool {
        let config = CastConfig::default().with_iterations(1000);
        ConfirmationPool::prepare(&Deck::standard(), "Test", &config, reversals).unwrap()
    }

    #[test]
    fn reference_pool_layout() {
        let pool = pool(false);
        assert_eq!(pool.len(), 78);

        let labels = pool.labels();
        assert_eq!(labels[0], "ed706c84");
        assert_eq!(labels[1], "fe95d8bc");
        assert_eq!(labels[77], "76039393");
        assert_eq!(labels.iter().collect::<HashSet<_>>().len(), 78);

        let first = pool.resolve("ed706c84").unwrap();
        assert_eq!(first.card.name, "Ace of Wands");
        assert_eq!(first.card.deck_position, 22);
        assert!(!first.is_reversed);
    }

    #[test]
    fn pool_without_reversals_is_fully_upright() {
        let pool = pool(false);
        let positions: Vec<usize> = pool.entries.iter().map(|e| e.card.deck_position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..78).collect::<Vec<_>>());
        assert!(pool.entries.iter().all(|e| !e.is_reversed));
    }

    #[test]
    fn reversal_pool_doubles_every_card() {
        let pool = pool(true);
        assert_eq!(pool.len(), 156);
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for entry in &pool.entries {
            *counts.entry(entry.card.deck_position).or_default() += 1;
        }
        assert_eq!(counts.len(), 78);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn prefix_resolution() {
        let pool = pool(false);
        assert_eq!(pool.resolve("ed7").unwrap().card.name, "Ace of Wands");
        assert!(matches!(
            pool.resolve("e4a"),
            Err(CastError::AmbiguousPrefix(_))
        ));
        assert!(matches!(
            pool.resolve("zzz"),
            Err(CastError::NoMatchingPrefix(_))
        ));
    }

    #[test]
    fn prefixes_are_case_insensitive() {
        let pool = pool(false);
        assert_eq!(pool.resolve("ED7").unwrap().card.name, "Ace of Wands");
    }

    #[test]
    fn reveal_removes_the_entry() {
        let mut pool = pool(false);
        let entry = pool.reveal("ed706c84").unwrap();
        assert_eq!(entry.card.name, "Ace of Wands");
        assert_eq!(pool.len(), 77);
        assert!(matches!(
            pool.reveal("ed706c84"),
            Err(CastError::NoMatchingPrefix(_))
        ));
    }

    #[test]
    fn progress_reports_every_slot() {
        let config = CastConfig::default().with_iterations(10);
        let mut seen = Vec::new();
        ConfirmationPool::prepare_with_progress(
            &Deck::standard(),
            "Test",
            &config,
            false,
            |generated, total| seen.push((generated, total)),
        )
        .unwrap();
        assert_eq!(seen.len(), 78);
        assert_eq!(seen[0], (1, 78));
        assert_eq!(seen[77], (78, 78));
    }

    #[test]
    fn drawer_convenience_matches_direct_preparation() {
        let config = CastConfig::default().with_iterations(1000);
        let via_drawer = DeckDrawer::new(config)
            .with_reversals(false)
            .confirmation_pool("Test")
            .unwrap();
        assert_eq!(via_drawer.labels(), pool(false).labels());
    }

    #[test]
    fn blank_query_rejected() {
        let config = CastConfig::default().with_iterations(10);
        assert!(ConfirmationPool::prepare(&Deck::standard(), "", &config, false).is_err());
    }
}
