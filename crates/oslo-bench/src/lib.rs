//! Benchmark profiles for the Oslo ricepile model.
//!
//! - [`warmed_pile`]: a seeded pile already driven into steady state, so
//!   benchmarks measure stationary avalanches rather than the fill phase.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use oslo_core::{Pile, PileError};
use oslo_engine::drive;

/// Grains needed to fill a pile of `size` sites, with margin.
///
/// A stable pile holds at most `size * (size + 1)` grains (every slope at
/// 2), so at least one grain has left by then.
pub fn fill_steps(size: usize) -> usize {
    size * (size + 1) + 1
}

/// Build a seeded pile and drive it until it is past steady-state onset.
pub fn warmed_pile(size: usize, seed: u64) -> Result<Pile, PileError> {
    let mut pile = Pile::seeded(size, seed)?;
    drive(&mut pile, fill_steps(size));
    Ok(pile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_steps_reach_steady_state() {
        for size in [1, 4, 16, 64] {
            let mut pile = Pile::seeded(size, 42).unwrap();
            let result = drive(&mut pile, fill_steps(size));
            assert!(result.reached_steady_state(), "size {size}");
        }
    }

    #[test]
    fn warmed_pile_is_stable_and_full() {
        let pile = warmed_pile(16, 1).unwrap();
        assert!(pile.is_stable());
        assert!(pile.grain_count() > 0);
    }
}
