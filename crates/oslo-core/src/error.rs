//! Input validation errors.

use thiserror::Error;

/// Errors surfaced to callers of the pile and driver APIs.
///
/// Both variants are input-validation failures. Relaxation itself always
/// terminates, so there is no runtime failure mode beyond these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PileError {
    /// A pile was requested with fewer than one site.
    #[error("pile size must be at least 1, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// A run was requested with a negative step count.
    #[error("step count must be non-negative, got {steps}")]
    InvalidSteps {
        /// The rejected step count.
        steps: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            PileError::InvalidSize { size: 0 }.to_string(),
            "pile size must be at least 1, got 0"
        );
        assert_eq!(
            PileError::InvalidSteps { steps: -1 }.to_string(),
            "step count must be non-negative, got -1"
        );
    }
}
