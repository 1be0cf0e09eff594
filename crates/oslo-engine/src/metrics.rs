//! Per-run counters collected by the driver.
//!
//! [`RunMetrics`] summarises one [`drive`](crate::drive) call: topple and
//! exit totals plus wall-clock time, for telemetry and benchmarks.

use crate::relax::Avalanche;

/// Totals collected over a single run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Sum of avalanche sizes over the run.
    pub total_topples: u64,
    /// Grains that left through the output boundary during the run.
    pub grains_out: u64,
    /// Size of the largest single avalanche.
    pub largest_avalanche: u64,
    /// Number of relaxations in which at least one grain left.
    pub exiting_steps: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// Fold one relaxation into the totals.
    pub fn record(&mut self, avalanche: &Avalanche) {
        self.total_topples += avalanche.size;
        self.grains_out += avalanche.grains_out;
        self.largest_avalanche = self.largest_avalanche.max(avalanche.size);
        if avalanche.grain_left() {
            self.exiting_steps += 1;
        }
    }
}
