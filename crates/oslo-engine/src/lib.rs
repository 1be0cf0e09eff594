//! Relaxation engine and simulation driver for the Oslo ricepile model.
//!
//! [`relax`] brings a driven pile back to stability and reports the
//! avalanche it produced. [`drive`] repeats add-grain-then-relax for a
//! number of steps and latches the first step at which a grain leaves the
//! pile (steady-state onset). [`RicePile`] wraps both behind the small
//! stateful surface a command-line front end needs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod metrics;
pub mod relax;
pub mod ricepile;

pub use config::PileConfig;
pub use driver::{drive, SimulationResult};
pub use metrics::RunMetrics;
pub use relax::{relax, Avalanche};
pub use ricepile::RicePile;
