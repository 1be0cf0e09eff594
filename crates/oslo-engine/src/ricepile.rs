//! Stateful ricepile world.
//!
//! [`RicePile`] owns a pile for its lifetime and remembers the result of the
//! most recent [`run`](RicePile::run), exposing the post-run queries a
//! front end needs (steady-state flag and step). Each run continues from
//! the pile state left by the previous one; the pile is never reset except
//! by an explicit [`reset`](RicePile::reset).

use oslo_core::{Pile, PileError, SeededThresholds, ThresholdSource};

use crate::config::PileConfig;
use crate::driver::{drive, SimulationResult};

// Compile-time assertion: a seeded RicePile can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<RicePile>();
    }
};

/// A ricepile plus the result of its latest run.
///
/// # Examples
///
/// ```
/// use oslo_engine::{PileConfig, RicePile};
///
/// let mut rice = RicePile::new(PileConfig { size: 4, seed: 42 }).unwrap();
/// let sizes = rice.run(1000).unwrap();
/// assert_eq!(sizes.len(), 1000);
/// assert!(rice.reached_steady_state());
/// assert!(rice.steady_state_time() >= 1);
///
/// assert!(rice.run(-1).is_err());
/// ```
pub struct RicePile<S = SeededThresholds> {
    pile: Pile<S>,
    last: Option<SimulationResult>,
}

impl RicePile<SeededThresholds> {
    /// Build a seeded pile from a validated [`PileConfig`].
    pub fn new(config: PileConfig) -> Result<Self, PileError> {
        config.validate()?;
        Ok(Self {
            pile: Pile::seeded(config.size, config.seed)?,
            last: None,
        })
    }

    /// Replace the pile with a fresh one of the same size and a new seed.
    ///
    /// Clears the last run result.
    pub fn reset(&mut self, seed: u64) -> Result<(), PileError> {
        self.pile = Pile::seeded(self.pile.size(), seed)?;
        self.last = None;
        Ok(())
    }

    /// Seed the current pile was built with.
    pub fn seed(&self) -> u64 {
        self.pile.seed()
    }
}

impl<S: ThresholdSource> RicePile<S> {
    /// Build a pile of `size` sites drawing thresholds from `source`.
    pub fn with_source(size: usize, source: S) -> Result<Self, PileError> {
        Ok(Self {
            pile: Pile::new(size, source)?,
            last: None,
        })
    }

    /// Drive the pile for `steps` grains and return the avalanche sizes.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidSteps`] for a negative `steps`; the pile
    /// and the previous result are left untouched.
    pub fn run(&mut self, steps: i64) -> Result<&[u64], PileError> {
        let steps = usize::try_from(steps).map_err(|_| PileError::InvalidSteps { steps })?;
        let result = drive(&mut self.pile, steps);
        Ok(&self.last.insert(result).avalanche_sizes)
    }

    /// Whether the latest run saw a grain leave the pile.
    pub fn reached_steady_state(&self) -> bool {
        self.last
            .as_ref()
            .is_some_and(SimulationResult::reached_steady_state)
    }

    /// Steady-state step of the latest run, or `0` if it was not reached.
    pub fn steady_state_time(&self) -> usize {
        self.last
            .as_ref()
            .map_or(0, SimulationResult::steady_state_time_or_zero)
    }

    /// Full result of the latest run, if any run has happened.
    pub fn last_result(&self) -> Option<&SimulationResult> {
        self.last.as_ref()
    }

    /// The underlying pile.
    pub fn pile(&self) -> &Pile<S> {
        &self.pile
    }

    /// Number of sites.
    pub fn size(&self) -> usize {
        self.pile.size()
    }
}

impl<S> std::fmt::Debug for RicePile<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RicePile")
            .field("size", &self.pile.size())
            .field("runs_recorded", &self.last.is_some())
            .field(
                "steady_state_time",
                &self.last.as_ref().and_then(|r| r.steady_state_time),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslo_core::Threshold;
    use oslo_test_utils::ConstThresholds;

    #[test]
    fn zero_size_is_rejected() {
        let err = RicePile::new(PileConfig { size: 0, seed: 1 }).unwrap_err();
        assert_eq!(err, PileError::InvalidSize { size: 0 });
    }

    #[test]
    fn negative_steps_leave_pile_untouched() {
        let mut rice = RicePile::new(PileConfig::default()).unwrap();
        rice.run(5).unwrap();
        let slopes = rice.pile().slopes().to_vec();
        let previous = rice.last_result().cloned();

        let err = rice.run(-1).unwrap_err();
        assert_eq!(err, PileError::InvalidSteps { steps: -1 });
        assert_eq!(rice.pile().slopes(), slopes.as_slice());
        assert_eq!(rice.last_result().cloned(), previous);
    }

    #[test]
    fn queries_before_any_run() {
        let rice = RicePile::new(PileConfig::default()).unwrap();
        assert!(!rice.reached_steady_state());
        assert_eq!(rice.steady_state_time(), 0);
        assert!(rice.last_result().is_none());
    }

    #[test]
    fn zero_steps_returns_empty() {
        let mut rice = RicePile::new(PileConfig::default()).unwrap();
        assert!(rice.run(0).unwrap().is_empty());
        assert!(!rice.reached_steady_state());
    }

    #[test]
    fn runs_continue_the_same_pile() {
        let mut rice = RicePile::with_source(2, ConstThresholds(Threshold::One)).unwrap();
        assert_eq!(rice.run(3).unwrap(), &[0, 1, 0]);
        assert!(!rice.reached_steady_state());
        assert_eq!(rice.run(2).unwrap(), &[2, 2]);
        assert!(rice.reached_steady_state());
        assert_eq!(rice.steady_state_time(), 1);
    }

    #[test]
    fn reset_rebuilds_a_fresh_pile() {
        let mut rice = RicePile::new(PileConfig { size: 8, seed: 3 }).unwrap();
        rice.run(200).unwrap();
        rice.reset(4).unwrap();
        assert_eq!(rice.seed(), 4);
        assert_eq!(rice.size(), 8);
        assert_eq!(rice.pile().grain_count(), 0);
        assert!(rice.last_result().is_none());
    }

    #[test]
    fn debug_is_compact() {
        let rice = RicePile::new(PileConfig::default()).unwrap();
        let s = format!("{rice:?}");
        assert!(s.contains("RicePile"));
        assert!(s.contains("size: 4"));
    }
}
