//! Entropy stretching: one seed, many labelled blocks.
//!
//! Every position in a reading (a hexagram line, a card slot, the cast
//! identifier) gets its own 32-byte block, derived from the seed and a
//! slot label. The heavy iteration count is ritual cost, not security;
//! what matters is that the mapping is deterministic and that no block
//! is ever reused across slots.

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::CastConfig;
use crate::seed::Seed;

/// Which stretching construction to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DerivationMethod {
    /// PBKDF2-HMAC-SHA256 with the slot label as salt.
    Pbkdf2,
    /// Repeated hashing: `state = SHA-256(state || label)` per iteration.
    ///
    /// Produces different blocks than PBKDF2 for the same inputs; a
    /// configuration picks one construction and keeps it.
    IteratedDigest,
}

impl DerivationMethod {
    /// Parse from a string like "pbkdf2" or "iterated".
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pbkdf2" => Some(Self::Pbkdf2),
            "iterated" | "iterated-digest" => Some(Self::IteratedDigest),
            _ => None,
        }
    }
}

impl std::fmt::Display for DerivationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pbkdf2 => write!(f, "pbkdf2"),
            Self::IteratedDigest => write!(f, "iterated-digest"),
        }
    }
}

/// A 32-byte block of stretched entropy for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyBlock([u8; 32]);

impl EntropyBlock {
    /// The raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// First byte, the source of a line value.
    pub fn first_byte(&self) -> u8 {
        self.0[0]
    }

    /// Big-endian integer over the first eight bytes, the source of a
    /// card selection.
    pub fn selection_value(&self) -> u64 {
        u64::from_be_bytes([
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7],
        ])
    }

    /// Whether the last byte is odd, the source of a card orientation.
    pub fn trailing_bit(&self) -> bool {
        (self.0[31] & 1) == 1
    }

    /// Lowercase hex rendering of the whole block.
    pub fn to_hex(self) -> String {
        crate::seed::hex_string(&self.0)
    }
}

/// Stretch the seed into the block for one labelled slot.
pub fn stretch(seed: &Seed, label: &str, config: &CastConfig) -> EntropyBlock {
    log::debug!(
        "stretching slot '{label}' ({} x {})",
        config.iterations,
        config.method
    );
    let mut out = [0u8; 32];
    match config.method {
        DerivationMethod::Pbkdf2 => {
            pbkdf2_hmac::<Sha256>(seed.as_bytes(), label.as_bytes(), config.iterations, &mut out);
        }
        DerivationMethod::IteratedDigest => {
            let mut state = *seed.as_bytes();
            for _ in 0..config.iterations {
                let mut hasher = Sha256::new();
                hasher.update(state);
                hasher.update(label.as_bytes());
                state = hasher.finalize().into();
            }
            out = state;
        }
    }
    EntropyBlock(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CastConfig {
        CastConfig::default().with_iterations(1000)
    }

    #[test]
    fn pbkdf2_block_is_reproducible() {
        let seed = Seed::derive("Test", Some("2024-01-01T00:00:00+00:00")).unwrap();
        let a = stretch(&seed, "card-0", &test_config());
        let b = stretch(&seed, "card-0", &test_config());
        assert_eq!(a, b);
        assert_eq!(&a.to_hex()[..8], "02773277");
    }

    #[test]
    fn cast_identifier_block_matches_reference() {
        let seed =
            Seed::derive("Will this project succeed?", Some("2024-01-01T00:00:00+00:00")).unwrap();
        let block = stretch(&seed, "hexagram-id", &test_config());
        assert_eq!(&block.to_hex()[..8], "3ed9018f");
    }

    #[test]
    fn distinct_labels_distinct_blocks() {
        let seed = Seed::derive("Test", None).unwrap();
        let a = stretch(&seed, "line-0", &test_config());
        let b = stretch(&seed, "line-1", &test_config());
        assert_ne!(a, b);
    }

    #[test]
    fn methods_diverge() {
        let seed = Seed::derive("Test", None).unwrap();
        let pbkdf2 = stretch(&seed, "line-0", &test_config());
        let iterated = stretch(
            &seed,
            "line-0",
            &test_config().with_method(DerivationMethod::IteratedDigest),
        );
        assert_ne!(pbkdf2, iterated);
    }

    #[test]
    fn accessors_read_the_block_edges() {
        let seed = Seed::derive("Test", None).unwrap();
        let block = stretch(&seed, "card-0", &test_config());
        let bytes = block.as_bytes();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&bytes[..8]);
        assert_eq!(block.selection_value(), u64::from_be_bytes(prefix));
        assert_eq!(block.first_byte(), bytes[0]);
        assert_eq!(block.trailing_bit(), bytes[31] & 1 == 1);
    }

    #[test]
    fn method_parsing() {
        assert_eq!(DerivationMethod::parse("pbkdf2"), Some(DerivationMethod::Pbkdf2));
        assert_eq!(
            DerivationMethod::parse("Iterated"),
            Some(DerivationMethod::IteratedDigest)
        );
        assert_eq!(DerivationMethod::parse("bcrypt"), None);
        assert_eq!(DerivationMethod::IteratedDigest.to_string(), "iterated-digest");
    }
}
