//! Per-site pile state.
//!
//! A [`Pile`] owns two fixed-length sequences indexed by site, `0` being the
//! input boundary where grains are added and `size - 1` the output boundary
//! where grains leave. Slopes change only through [`Pile::add_grain`] and
//! [`Pile::topple`]; a site's threshold changes only when it topples.

use crate::error::PileError;
use crate::threshold::{SeededThresholds, Threshold, ThresholdSource};

/// Outcome of toppling a single site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topple {
    /// Slope moved between sites; no grain left the system.
    Internal,
    /// The output boundary toppled and one grain left the system.
    Exit,
}

/// State of a one-dimensional ricepile.
///
/// # Examples
///
/// ```
/// use oslo_core::Pile;
///
/// let mut pile = Pile::seeded(4, 42).unwrap();
/// assert_eq!(pile.size(), 4);
/// assert!(pile.slopes().iter().all(|&z| z == 0));
/// assert!(pile.is_stable());
///
/// pile.add_grain();
/// assert_eq!(pile.slopes()[0], 1);
/// assert_eq!(pile.grain_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Pile<S = SeededThresholds> {
    slopes: Vec<i32>,
    thresholds: Vec<Threshold>,
    source: S,
}

impl Pile<SeededThresholds> {
    /// Build a pile with a [`SeededThresholds`] source.
    pub fn seeded(size: usize, seed: u64) -> Result<Self, PileError> {
        Self::new(size, SeededThresholds::new(seed))
    }

    /// Seed of the underlying source.
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: ThresholdSource> Pile<S> {
    /// Build an empty pile of `size` sites.
    ///
    /// Slopes start at zero. One threshold per site is drawn from `source`,
    /// site 0 first.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidSize`] if `size == 0`.
    pub fn new(size: usize, source: S) -> Result<Self, PileError> {
        Self::from_slopes(vec![0; size], source)
    }

    /// Build a pile from explicit starting slopes, drawing fresh thresholds.
    ///
    /// The pile may start unstable; the first relaxation resolves it.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidSize`] if `slopes` is empty.
    pub fn from_slopes(slopes: Vec<i32>, mut source: S) -> Result<Self, PileError> {
        if slopes.is_empty() {
            return Err(PileError::InvalidSize { size: 0 });
        }
        let thresholds = slopes.iter().map(|_| source.draw()).collect();
        Ok(Self {
            slopes,
            thresholds,
            source,
        })
    }

    /// Topple `site` once and re-draw its threshold.
    ///
    /// Redistribution depends on where the site sits:
    /// - interior: loses 2, each neighbour gains 1;
    /// - input boundary: loses 2, site 1 gains 1;
    /// - output boundary: loses 1, site `size - 2` gains 1, one grain exits.
    ///
    /// A single-site pile uses the output-boundary rule with no neighbour
    /// to receive the slope, so its only site loses 1 and a grain exits.
    ///
    /// Does not check that the site was unstable.
    ///
    /// # Panics
    ///
    /// Panics if `site >= self.size()`.
    pub fn topple(&mut self, site: usize) -> Topple {
        let last = self.slopes.len() - 1;
        let outcome = if site == last {
            self.slopes[site] -= 1;
            if site > 0 {
                self.slopes[site - 1] += 1;
            }
            Topple::Exit
        } else if site == 0 {
            self.slopes[0] -= 2;
            self.slopes[1] += 1;
            Topple::Internal
        } else {
            self.slopes[site] -= 2;
            self.slopes[site - 1] += 1;
            self.slopes[site + 1] += 1;
            Topple::Internal
        };
        self.thresholds[site] = self.source.draw();
        outcome
    }
}

impl<S> Pile<S> {
    /// Number of sites. Always at least 1.
    pub fn size(&self) -> usize {
        self.slopes.len()
    }

    /// Current slope of every site.
    pub fn slopes(&self) -> &[i32] {
        &self.slopes
    }

    /// Current threshold of every site.
    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    /// The threshold source owned by this pile.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Column heights implied by the slopes: `h[i] = slopes[i] + h[i + 1]`,
    /// with the output boundary resting on the floor.
    pub fn heights(&self) -> Vec<i64> {
        let mut heights = vec![0i64; self.slopes.len()];
        let mut acc = 0i64;
        for (h, &z) in heights.iter_mut().zip(&self.slopes).rev() {
            acc += i64::from(z);
            *h = acc;
        }
        heights
    }

    /// Grains currently resting on the pile (sum of all column heights).
    pub fn grain_count(&self) -> i64 {
        self.slopes
            .iter()
            .zip(1i64..)
            .map(|(&z, w)| i64::from(z) * w)
            .sum()
    }

    /// Whether `site` exceeds its threshold.
    ///
    /// # Panics
    ///
    /// Panics if `site >= self.size()`.
    pub fn is_unstable(&self, site: usize) -> bool {
        self.thresholds[site].is_exceeded_by(self.slopes[site])
    }

    /// Whether every site is at or below its threshold.
    pub fn is_stable(&self) -> bool {
        self.slopes
            .iter()
            .zip(&self.thresholds)
            .all(|(&z, t)| !t.is_exceeded_by(z))
    }

    /// Drive the pile: drop one grain on the input boundary.
    pub fn add_grain(&mut self) {
        self.slopes[0] += 1;
    }
}
