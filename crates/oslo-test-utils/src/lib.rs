//! Test utilities for Oslo development.
//!
//! Provides [`ThresholdSource`] doubles that pin the threshold draws so
//! relaxation outcomes become exact, plus small pile constructors.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use oslo_core::{Pile, PileError, Threshold, ThresholdSource};

/// Source that always draws the same threshold.
#[derive(Clone, Copy, Debug)]
pub struct ConstThresholds(pub Threshold);

impl ThresholdSource for ConstThresholds {
    fn draw(&mut self) -> Threshold {
        self.0
    }
}

/// Source that replays a fixed script of draws, cycling when exhausted.
///
/// An empty script draws [`Threshold::One`] forever. The number of draws
/// taken so far is available from [`draws`](ScriptedThresholds::draws), so
/// tests can assert exactly how many topples consumed randomness.
#[derive(Clone, Debug)]
pub struct ScriptedThresholds {
    script: Vec<Threshold>,
    draws: usize,
}

impl ScriptedThresholds {
    pub fn new(script: Vec<Threshold>) -> Self {
        Self { script, draws: 0 }
    }

    /// Build a script from integer values; anything other than 1 maps to
    /// [`Threshold::Two`].
    pub fn from_values(values: &[u8]) -> Self {
        Self::new(
            values
                .iter()
                .map(|&v| if v == 1 { Threshold::One } else { Threshold::Two })
                .collect(),
        )
    }

    /// Total draws served so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ThresholdSource for ScriptedThresholds {
    fn draw(&mut self) -> Threshold {
        let t = if self.script.is_empty() {
            Threshold::One
        } else {
            self.script[self.draws % self.script.len()]
        };
        self.draws += 1;
        t
    }
}

/// Empty pile whose thresholds are all `threshold`, now and after every topple.
pub fn uniform_pile(
    size: usize,
    threshold: Threshold,
) -> Result<Pile<ConstThresholds>, PileError> {
    Pile::new(size, ConstThresholds(threshold))
}

/// Empty pile driven by a scripted source. The first `size` draws become the
/// initial thresholds; the rest are consumed by topples in order.
pub fn scripted_pile(
    size: usize,
    script: &[u8],
) -> Result<Pile<ScriptedThresholds>, PileError> {
    Pile::new(size, ScriptedThresholds::from_values(script))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_cycles_and_counts() {
        let mut src = ScriptedThresholds::from_values(&[1, 2]);
        let drawn: Vec<_> = (0..5).map(|_| src.draw()).collect();
        assert_eq!(
            drawn,
            vec![
                Threshold::One,
                Threshold::Two,
                Threshold::One,
                Threshold::Two,
                Threshold::One
            ]
        );
        assert_eq!(src.draws(), 5);
    }

    #[test]
    fn empty_script_draws_one() {
        let mut src = ScriptedThresholds::new(vec![]);
        assert_eq!(src.draw(), Threshold::One);
    }

    #[test]
    fn scripted_pile_takes_initial_thresholds_in_site_order() {
        let pile = scripted_pile(3, &[2, 1, 2]).unwrap();
        assert_eq!(
            pile.thresholds(),
            &[Threshold::Two, Threshold::One, Threshold::Two]
        );
        assert_eq!(pile.source().draws(), 3);
    }
}
