//! Oslo: the Oslo ricepile model of self-organized criticality.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Oslo sub-crates. For most users, adding `oslo` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use oslo::prelude::*;
//!
//! let mut rice = RicePile::new(PileConfig { size: 16, seed: 7 }).unwrap();
//! let sizes = rice.run(2_000).unwrap().to_vec();
//! assert_eq!(sizes.len(), 2_000);
//!
//! if rice.reached_steady_state() {
//!     // Avalanches after the first grain left are the stationary regime.
//!     let stationary = &sizes[rice.steady_state_time()..];
//!     assert!(stationary.len() < sizes.len());
//! }
//! ```
//!
//! Lower-level control, with an injected threshold source:
//!
//! ```rust
//! use oslo::prelude::*;
//!
//! let mut pile = Pile::new(8, SeededThresholds::new(99)).unwrap();
//! pile.add_grain();
//! let avalanche = relax(&mut pile);
//! assert!(pile.is_stable());
//! assert_eq!(avalanche.size, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `oslo-core` | `Pile`, `Threshold`, `ThresholdSource`, `PileError` |
//! | [`engine`] | `oslo-engine` | `relax`, `drive`, `SimulationResult`, `RicePile` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Pile state, thresholds, and randomness (`oslo-core`).
pub use oslo_core as types;

/// Relaxation engine and simulation driver (`oslo-engine`).
///
/// [`engine::relax`] resolves a single avalanche, [`engine::drive`] runs a
/// whole simulation, [`engine::RicePile`] keeps a pile across runs.
pub use oslo_engine as engine;

/// Common imports for typical Oslo usage.
///
/// ```rust
/// use oslo::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use oslo_core::{Pile, PileError, SeededThresholds, Threshold, ThresholdSource, Topple};

    // Engine
    pub use oslo_engine::{
        drive, relax, Avalanche, PileConfig, RicePile, RunMetrics, SimulationResult,
    };
}
