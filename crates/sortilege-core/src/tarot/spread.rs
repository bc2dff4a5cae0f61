//! Spread layouts.

use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};

/// Supported spread layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadSize {
    /// One card: a single message.
    Single,
    /// Three cards: past, present, future.
    ThreeCard,
    /// Ten cards in the Celtic Cross layout.
    CelticCross,
}

impl SpreadSize {
    /// How many cards the spread draws.
    pub fn card_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::ThreeCard => 3,
            Self::CelticCross => 10,
        }
    }

    /// Resolve a card count into a spread.
    pub fn from_count(count: u32) -> CastResult<Self> {
        match count {
            1 => Ok(Self::Single),
            3 => Ok(Self::ThreeCard),
            10 => Ok(Self::CelticCross),
            other => Err(CastError::InvalidSpread(other)),
        }
    }

    /// Position labels for the spread, in draw order.
    pub fn position_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Single => &["Message"],
            Self::ThreeCard => &["Past", "Present", "Future"],
            Self::CelticCross => &[
                "Present (Significator)",
                "Challenge (Crossing)",
                "Subconscious (Below)",
                "Recent Past (Behind)",
                "Conscious (Above)",
                "Near Future (Before You)",
                "Self",
                "Environment",
                "Hopes & Fears",
                "Outcome",
            ],
        }
    }
}

impl std::fmt::Display for SpreadSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single card"),
            Self::ThreeCard => write!(f, "three-card"),
            Self::CelticCross => write!(f, "Celtic Cross"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_round_trip() {
        for count in [1u32, 3, 10] {
            let spread = SpreadSize::from_count(count).unwrap();
            assert_eq!(spread.card_count() as u32, count);
        }
    }

    #[test]
    fn unsupported_counts_rejected() {
        assert!(matches!(
            SpreadSize::from_count(5),
            Err(CastError::InvalidSpread(5))
        ));
        assert!(SpreadSize::from_count(0).is_err());
    }

    #[test]
    fn labels_cover_every_position() {
        for spread in [SpreadSize::Single, SpreadSize::ThreeCard, SpreadSize::CelticCross] {
            assert_eq!(spread.position_labels().len(), spread.card_count());
        }
    }
}
