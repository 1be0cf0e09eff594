//! Core types for the Oslo ricepile model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-site pile state, the two-valued critical slope ([`Threshold`]), the
//! injectable randomness seam ([`ThresholdSource`]) and the input
//! validation errors shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pile;
pub mod threshold;

pub use error::PileError;
pub use pile::{Pile, Topple};
pub use threshold::{SeededThresholds, Threshold, ThresholdSource};
