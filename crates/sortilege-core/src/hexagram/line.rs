//! Line values from the three-coin method.

use serde::{Deserialize, Serialize};

use crate::entropy::EntropyBlock;

/// A single cast line.
///
/// The numeric values match the traditional three-coin totals: 6 and 9
/// are moving (old) lines, 7 and 8 are stable (young) lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// 6, a broken line changing into a solid one.
    OldYin,
    /// 7, a stable solid line.
    YoungYang,
    /// 8, a stable broken line.
    YoungYin,
    /// 9, a solid line changing into a broken one.
    OldYang,
}

impl Line {
    /// Derive a line from an entropy block.
    ///
    /// The three lowest bits of the first byte stand in for three coin
    /// tosses; the count of set bits added to six gives the line value.
    pub fn from_block(block: &EntropyBlock) -> Self {
        let heads = (block.first_byte() & 0b111).count_ones() as u8;
        match heads {
            0 => Self::OldYin,
            1 => Self::YoungYang,
            2 => Self::YoungYin,
            _ => Self::OldYang,
        }
    }

    /// The traditional numeric value (6, 7, 8 or 9).
    pub fn value(&self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Binary polarity: 0 for yin, 1 for yang.
    pub fn bit(&self) -> u8 {
        match self {
            Self::OldYin | Self::YoungYin => 0,
            Self::YoungYang | Self::OldYang => 1,
        }
    }

    /// Whether this line is moving (old).
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }
}

impl Serialize for Line {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Line {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(serde::de::Error::custom(format!(
                "line value must be 6-9, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CastConfig;
    use crate::entropy::stretch;
    use crate::seed::Seed;

    #[test]
    fn value_bit_and_movement() {
        assert_eq!(Line::OldYin.value(), 6);
        assert_eq!(Line::YoungYang.value(), 7);
        assert_eq!(Line::YoungYin.value(), 8);
        assert_eq!(Line::OldYang.value(), 9);

        assert_eq!(Line::OldYin.bit(), 0);
        assert_eq!(Line::YoungYin.bit(), 0);
        assert_eq!(Line::YoungYang.bit(), 1);
        assert_eq!(Line::OldYang.bit(), 1);

        assert!(Line::OldYin.is_moving());
        assert!(Line::OldYang.is_moving());
        assert!(!Line::YoungYang.is_moving());
        assert!(!Line::YoungYin.is_moving());
    }

    #[test]
    fn derived_from_low_bits_of_first_byte() {
        let seed = Seed::derive("Test", None).unwrap();
        let cfg = CastConfig::default().with_iterations(1000);
        for slot in 0..6 {
            let block = stretch(&seed, &format!("line-{slot}"), &cfg);
            let expected = 6 + (block.first_byte() & 0b111).count_ones() as u8;
            assert_eq!(Line::from_block(&block).value(), expected);
        }
    }

    #[test]
    fn serializes_as_bare_value() {
        let json = serde_json::to_string(&Line::OldYang).unwrap();
        assert_eq!(json, "9");
        let back: Line = serde_json::from_str("6").unwrap();
        assert_eq!(back, Line::OldYin);
        assert!(serde_json::from_str::<Line>("5").is_err());
    }
}
