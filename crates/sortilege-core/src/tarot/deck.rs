//! The 78-card deck.

use serde::{Deserialize, Serialize};

/// Names of the Major Arcana, in deck order (22 entries).
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Minor Arcana suits, in deck order.
pub const SUITS: [&str; 4] = ["Wands", "Cups", "Swords", "Pentacles"];

/// Minor Arcana ranks, in deck order.
pub const RANKS: [&str; 14] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Page", "Knight", "Queen", "King",
];

/// A single card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Card name, e.g. "The Fool" or "4 of Pentacles".
    pub name: String,
    /// Whether the card belongs to the Major Arcana.
    pub is_major: bool,
    /// Fixed position in the deck (0-77).
    pub deck_position: usize,
}

/// An ordered deck of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<TarotCard>,
}

impl Deck {
    /// Build the standard 78-card deck: the Major Arcana followed by
    /// each suit in rank order.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(78);
        for name in MAJOR_ARCANA {
            cards.push(TarotCard {
                name: name.to_string(),
                is_major: true,
                deck_position: cards.len(),
            });
        }
        for suit in SUITS {
            for rank in RANKS {
                cards.push(TarotCard {
                    name: format!("{rank} of {suit}"),
                    is_major: false,
                    deck_position: cards.len(),
                });
            }
        }
        Self { cards }
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at a deck position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range; positions handed out by
    /// the drawer are always in range.
    pub fn card(&self, position: usize) -> &TarotCard {
        &self.cards[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_78_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 78);
        assert!(!deck.is_empty());
    }

    #[test]
    fn majors_precede_minors() {
        let deck = Deck::standard();
        assert_eq!(deck.card(0).name, "The Fool");
        assert_eq!(deck.card(2).name, "The High Priestess");
        assert_eq!(deck.card(14).name, "Temperance");
        assert_eq!(deck.card(21).name, "The World");
        assert!(deck.card(21).is_major);
        assert_eq!(deck.card(22).name, "Ace of Wands");
        assert!(!deck.card(22).is_major);
        assert_eq!(deck.card(67).name, "4 of Pentacles");
        assert_eq!(deck.card(77).name, "King of Pentacles");
    }

    #[test]
    fn positions_match_indices() {
        let deck = Deck::standard();
        for position in 0..deck.len() {
            assert_eq!(deck.card(position).deck_position, position);
        }
    }
}
