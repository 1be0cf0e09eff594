//! Relaxation of a driven pile back to a stable configuration.
//!
//! Sweep order is left to right. Within a pass, a topple is visible to
//! every later site of the same pass; passes repeat until one finds no
//! unstable site. Because each topple consumes one threshold draw, the
//! sweep order fixes which draw lands on which site, so a seeded run is
//! reproducible only against this exact order.

use oslo_core::{Pile, ThresholdSource, Topple};

/// What a single relaxation did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Avalanche {
    /// Number of topple events, counting repeat topples of the same site.
    pub size: u64,
    /// Number of grains that left through the output boundary.
    pub grains_out: u64,
}

impl Avalanche {
    /// Whether at least one grain left the system during this relaxation.
    pub fn grain_left(&self) -> bool {
        self.grains_out > 0
    }
}

/// Topple unstable sites until every slope is at or below its threshold.
///
/// Returns a zero-sized [`Avalanche`] when the pile was already stable.
/// Terminates for every reachable configuration: slope only leaves the
/// system at the output boundary and thresholds never exceed 2.
pub fn relax<S: ThresholdSource>(pile: &mut Pile<S>) -> Avalanche {
    let mut avalanche = Avalanche::default();
    loop {
        let mut stable = true;
        for site in 0..pile.size() {
            if !pile.is_unstable(site) {
                continue;
            }
            stable = false;
            avalanche.size += 1;
            if pile.topple(site) == Topple::Exit {
                avalanche.grains_out += 1;
            }
        }
        if stable {
            return avalanche;
        }
    }
}
