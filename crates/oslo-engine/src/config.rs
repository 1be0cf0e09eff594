//! Pile configuration and validation.

use oslo_core::PileError;

/// Configuration for a seeded [`RicePile`](crate::RicePile).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileConfig {
    /// Number of sites. Default: 4. Minimum: 1.
    pub size: usize,
    /// Seed for the threshold draws. Default: 0.
    pub seed: u64,
}

impl Default for PileConfig {
    fn default() -> Self {
        Self { size: 4, seed: 0 }
    }
}

impl PileConfig {
    /// Check structural invariants without building anything.
    pub fn validate(&self) -> Result<(), PileError> {
        if self.size == 0 {
            return Err(PileError::InvalidSize { size: self.size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = PileConfig::default();
        assert_eq!(config.size, 4);
        config.validate().unwrap();
    }

    #[test]
    fn zero_size_fails_validation() {
        let config = PileConfig { size: 0, seed: 9 };
        assert_eq!(config.validate(), Err(PileError::InvalidSize { size: 0 }));
    }
}
