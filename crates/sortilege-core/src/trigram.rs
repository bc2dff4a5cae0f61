//! The eight trigrams.

use serde::{Deserialize, Serialize};

/// One of the eight trigrams, identified by its three lines.
///
/// The discriminant order follows the bit encoding used when mapping
/// line bits to trigrams: index = b0 + 2*b1 + 4*b2, bottom line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ Kun, three broken lines.
    Earth,
    /// ☶ Gen, one solid line above two broken.
    Mountain,
    /// ☵ Kan, a solid line between broken lines.
    Water,
    /// ☴ Xun, two solid lines above a broken one.
    Wind,
    /// ☳ Zhen, one solid line below two broken.
    Thunder,
    /// ☲ Li, broken line between solid lines.
    Fire,
    /// ☱ Dui, one broken line above two solid.
    Lake,
    /// ☰ Qian, three solid lines.
    Heaven,
}

/// Trigrams in bit-encoding order.
const CANONICAL: [Trigram; 8] = [
    Trigram::Earth,
    Trigram::Mountain,
    Trigram::Water,
    Trigram::Wind,
    Trigram::Thunder,
    Trigram::Fire,
    Trigram::Lake,
    Trigram::Heaven,
];

impl Trigram {
    /// Build a trigram from three line bits, bottom to top.
    pub fn from_bits(bits: [u8; 3]) -> Self {
        let index = (bits[0] & 1) + ((bits[1] & 1) << 1) + ((bits[2] & 1) << 2);
        CANONICAL[index as usize]
    }

    /// The Unicode trigram glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Earth => "☷",
            Self::Mountain => "☶",
            Self::Water => "☵",
            Self::Wind => "☴",
            Self::Thunder => "☳",
            Self::Fire => "☲",
            Self::Lake => "☱",
            Self::Heaven => "☰",
        }
    }

    /// Transliterated name with its English gloss.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Earth => "Kun (Earth/Receptive)",
            Self::Mountain => "Gen (Mountain/Keeping Still)",
            Self::Water => "Kan (Water/Abysmal)",
            Self::Wind => "Xun (Wind/Wood/Gentle)",
            Self::Thunder => "Zhen (Thunder/Arousing)",
            Self::Fire => "Li (Fire/Clinging)",
            Self::Lake => "Dui (Lake/Joyous)",
            Self::Heaven => "Qian (Heaven/Creative)",
        }
    }

    /// The trigram's traditional attributes.
    pub fn attributes(&self) -> &'static str {
        match self {
            Self::Earth => "receptive, yielding, devoted",
            Self::Mountain => "still, stopping, resting",
            Self::Water => "dangerous, flowing, profound",
            Self::Wind => "gentle, penetrating, flexible",
            Self::Thunder => "arousing, stirring, shocking",
            Self::Fire => "clinging, illuminating, clarifying",
            Self::Lake => "joyous, open, reflecting",
            Self::Heaven => "strong, creative, initiating",
        }
    }

    /// One-line image phrase, used to compose an Image text for pairs
    /// missing from the catalogue.
    pub fn image_phrase(&self) -> &'static str {
        match self {
            Self::Earth => "Earth is receptive and devoted",
            Self::Mountain => "Mountain keeps still",
            Self::Water => "Water flows in danger",
            Self::Wind => "Wind/Wood gently penetrates",
            Self::Thunder => "Thunder arouses and stirs",
            Self::Fire => "Fire clings and illuminates",
            Self::Lake => "Lake is joyous and open",
            Self::Heaven => "Heaven moves strongly",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_encoding_order() {
        assert_eq!(Trigram::from_bits([0, 0, 0]), Trigram::Earth);
        assert_eq!(Trigram::from_bits([1, 0, 0]), Trigram::Mountain);
        assert_eq!(Trigram::from_bits([0, 1, 0]), Trigram::Water);
        assert_eq!(Trigram::from_bits([1, 1, 0]), Trigram::Wind);
        assert_eq!(Trigram::from_bits([0, 0, 1]), Trigram::Thunder);
        assert_eq!(Trigram::from_bits([1, 0, 1]), Trigram::Fire);
        assert_eq!(Trigram::from_bits([0, 1, 1]), Trigram::Lake);
        assert_eq!(Trigram::from_bits([1, 1, 1]), Trigram::Heaven);
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<_> = CANONICAL.iter().map(|t| t.glyph()).collect();
        assert_eq!(glyphs.len(), 8);
    }

    #[test]
    fn every_trigram_carries_its_texts() {
        for trigram in CANONICAL {
            assert!(!trigram.name().is_empty());
            assert!(!trigram.attributes().is_empty());
            assert!(!trigram.image_phrase().is_empty());
        }
        assert_eq!(Trigram::Heaven.image_phrase(), "Heaven moves strongly");
    }

    #[test]
    fn display_is_the_glyph() {
        assert_eq!(Trigram::Heaven.to_string(), "☰");
        assert_eq!(Trigram::Earth.to_string(), "☷");
    }
}
