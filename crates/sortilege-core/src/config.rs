//! Configuration for entropy derivation.

use serde::{Deserialize, Serialize};

use crate::entropy::DerivationMethod;

/// Default number of stretching iterations.
///
/// Eight is the prosperity number; the repetition is deliberate. Any count
/// above a few thousand yields the same statistical behavior, so tests run
/// far cheaper configurations.
pub const DEFAULT_ITERATIONS: u32 = 888_888;

/// Configuration for a casting or drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastConfig {
    /// Number of stretching iterations per entropy slot.
    pub iterations: u32,
    /// Which derivation construction to use.
    pub method: DerivationMethod,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            method: DerivationMethod::Pbkdf2,
        }
    }
}

impl CastConfig {
    /// Set the iteration count (floored at 1).
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set the derivation method.
    pub fn with_method(mut self, method: DerivationMethod) -> Self {
        self.method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = CastConfig::default();
        assert_eq!(cfg.iterations, 888_888);
        assert_eq!(cfg.method, DerivationMethod::Pbkdf2);
    }

    #[test]
    fn builder_methods() {
        let cfg = CastConfig::default()
            .with_iterations(1000)
            .with_method(DerivationMethod::IteratedDigest);
        assert_eq!(cfg.iterations, 1000);
        assert_eq!(cfg.method, DerivationMethod::IteratedDigest);
    }

    #[test]
    fn iterations_floored() {
        let cfg = CastConfig::default().with_iterations(0);
        assert_eq!(cfg.iterations, 1);
    }
}
