//! The driving loop: add a grain, relax, record.

use std::time::Instant;

use oslo_core::{Pile, ThresholdSource};
use tracing::{debug, info, trace};

use crate::metrics::RunMetrics;
use crate::relax::relax;

/// Outcome of one [`drive`] call.
///
/// Step indices are relative to the run that produced the result, starting
/// at 1, even when the pile had been driven before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationResult {
    /// One avalanche size per step, in step order.
    pub avalanche_sizes: Vec<u64>,
    /// 1-based step at which a grain first left the pile, if any did.
    /// Latched once per run.
    pub steady_state_time: Option<usize>,
    /// Totals for the run.
    pub metrics: RunMetrics,
}

impl SimulationResult {
    /// Whether any grain left the pile during the run.
    pub fn reached_steady_state(&self) -> bool {
        self.steady_state_time.is_some()
    }

    /// Steady-state step, or `0` if the run never reached it.
    pub fn steady_state_time_or_zero(&self) -> usize {
        self.steady_state_time.unwrap_or(0)
    }

    /// Avalanche sizes recorded after the steady-state step.
    ///
    /// Empty when steady state was never reached.
    pub fn steady_state_avalanches(&self) -> &[u64] {
        match self.steady_state_time {
            Some(t) => &self.avalanche_sizes[t..],
            None => &[],
        }
    }
}

/// Drive `pile` for `steps` grains.
///
/// Each step drops one grain on site 0 and relaxes the pile to stability.
/// `steps == 0` returns an empty result without touching the pile.
pub fn drive<S: ThresholdSource>(pile: &mut Pile<S>, steps: usize) -> SimulationResult {
    let start = Instant::now();
    debug!(size = pile.size(), steps, "starting run");

    let mut result = SimulationResult {
        avalanche_sizes: Vec::with_capacity(steps),
        ..Default::default()
    };

    for step in 1..=steps {
        pile.add_grain();
        let avalanche = relax(pile);
        trace!(
            step,
            size = avalanche.size,
            grains_out = avalanche.grains_out,
            "avalanche"
        );
        result.metrics.record(&avalanche);
        result.avalanche_sizes.push(avalanche.size);

        if result.steady_state_time.is_none() && avalanche.grain_left() {
            result.steady_state_time = Some(step);
            info!(step, size = pile.size(), "steady state reached");
        }
    }

    result.metrics.elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    debug!(
        steps,
        total_topples = result.metrics.total_topples,
        grains_out = result.metrics.grains_out,
        steady_state_time = ?result.steady_state_time,
        elapsed_us = result.metrics.elapsed_us,
        "run finished"
    );
    result
}
