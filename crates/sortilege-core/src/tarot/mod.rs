//! Tarot drawing.
//!
//! A drawing stretches the seed into one slot per spread position and
//! selects cards from the remaining deck without replacement. The
//! confirmation pool variant lays out the whole deck face down instead,
//! letting the querent pick cards by hash prefix.

mod deck;
mod draw;
mod pool;
mod spread;

pub use deck::{Deck, MAJOR_ARCANA, RANKS, SUITS, TarotCard};
pub use draw::{DeckDrawer, DrawnCard, TarotReading};
pub use pool::{ConfirmationPool, PoolEntry};
pub use spread::SpreadSize;
