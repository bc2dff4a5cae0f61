//! Six-bit hexagram patterns.

use serde::{Deserialize, Serialize};

use crate::hexagram::line::Line;
use crate::trigram::Trigram;

/// The binary shape of a hexagram: six bits, bottom line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pattern([u8; 6]);

impl Pattern {
    /// Build a pattern from raw bits (each taken modulo 2).
    pub fn new(bits: [u8; 6]) -> Self {
        Self(bits.map(|b| b & 1))
    }

    /// Build a pattern from six cast lines.
    pub fn from_lines(lines: &[Line; 6]) -> Self {
        Self(lines.each_ref().map(Line::bit))
    }

    /// The six bits, bottom to top.
    pub fn bits(&self) -> [u8; 6] {
        self.0
    }

    /// The lower (inner) trigram, bits 0-2.
    pub fn lower(&self) -> Trigram {
        Trigram::from_bits([self.0[0], self.0[1], self.0[2]])
    }

    /// The upper (outer) trigram, bits 3-5.
    pub fn upper(&self) -> Trigram {
        Trigram::from_bits([self.0[3], self.0[4], self.0[5]])
    }

    /// A copy with the given positions flipped. Out-of-range positions
    /// are ignored.
    pub fn with_flipped(&self, positions: &[usize]) -> Self {
        let mut bits = self.0;
        for &pos in positions {
            if let Some(bit) = bits.get_mut(pos) {
                *bit = 1 - *bit;
            }
        }
        Self(bits)
    }

    /// The nuclear pattern formed by the four inner lines: lines 2-4
    /// become the lower trigram, lines 3-5 the upper.
    pub fn nuclear(&self) -> Self {
        let b = self.0;
        Self([b[1], b[2], b[3], b[2], b[3], b[4]])
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = <[u8; 6]>::deserialize(deserializer)?;
        if let Some(bad) = bits.iter().find(|&&bit| bit > 1) {
            return Err(serde::de::Error::custom(format!(
                "pattern bits must be 0 or 1, got {bad}"
            )));
        }
        Ok(Self(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trigram_split() {
        let pattern = Pattern::new([1, 1, 1, 0, 0, 0]);
        assert_eq!(pattern.lower(), Trigram::Heaven);
        assert_eq!(pattern.upper(), Trigram::Earth);
    }

    #[test]
    fn nuclear_reuses_inner_lines() {
        assert_eq!(
            Pattern::new([0, 1, 0, 0, 1, 1]).nuclear(),
            Pattern::new([1, 0, 0, 0, 0, 1])
        );
        assert_eq!(
            Pattern::new([1, 1, 1, 1, 1, 1]).nuclear(),
            Pattern::new([1, 1, 1, 1, 1, 1])
        );
        assert_eq!(
            Pattern::new([1, 0, 1, 0, 1, 0]).nuclear(),
            Pattern::new([0, 1, 0, 1, 0, 1])
        );
    }

    #[test]
    fn flip_ignores_out_of_range() {
        let pattern = Pattern::new([0, 0, 0, 0, 0, 0]);
        assert_eq!(pattern.with_flipped(&[0, 9]), Pattern::new([1, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&Pattern::new([0, 1, 0, 0, 1, 1])).unwrap();
        assert_eq!(json, "[0,1,0,0,1,1]");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pattern::new([0, 1, 0, 0, 1, 1]));
        assert!(serde_json::from_str::<Pattern>("[2,0,0,0,0,0]").is_err());
    }

    proptest! {
        #[test]
        fn flipping_twice_restores(bits in prop::array::uniform6(0u8..=1)) {
            let pattern = Pattern::new(bits);
            let all = [0, 1, 2, 3, 4, 5];
            prop_assert_eq!(pattern.with_flipped(&all).with_flipped(&all), pattern);
        }

        #[test]
        fn nuclear_matches_inner_line_formula(bits in prop::array::uniform6(0u8..=1)) {
            let nuclear = Pattern::new(bits).nuclear().bits();
            prop_assert_eq!(
                nuclear,
                [bits[1], bits[2], bits[3], bits[2], bits[3], bits[4]].map(|b| b & 1)
            );
        }
    }
}
