//! Deterministic divination: hexagram casting and tarot drawing.
//!
//! Every reading follows the same pipeline. A seed is derived from the
//! querent's question (and usually the moment it was asked), stretched
//! into an independent 32-byte entropy block per position, and each
//! block is mapped onto a symbol: a hexagram line, a card and its
//! orientation, or the cast identifier.
//!
//! Determinism is the contract: the same question at the same moment
//! always yields the same reading, bit for bit. The heavy default
//! iteration count is ceremony rather than security; lowering it (as
//! the tests do) changes cost, not character.

pub mod config;
pub mod entropy;
pub mod error;
pub mod hexagram;
pub mod seed;
pub mod tarot;
pub mod trigram;

pub use config::{CastConfig, DEFAULT_ITERATIONS};
pub use entropy::{DerivationMethod, EntropyBlock};
pub use error::{CastError, CastResult};
pub use hexagram::{HexagramCaster, HexagramReading, HexagramRecord, Line, Pattern};
pub use seed::Seed;
pub use tarot::{
    ConfirmationPool, Deck, DeckDrawer, DrawnCard, PoolEntry, SpreadSize, TarotCard, TarotReading,
};
pub use trigram::Trigram;
