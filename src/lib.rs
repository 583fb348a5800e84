//! Monte Carlo census of mine cluster shapes
//!
//! Random boards with a fixed number of mines are generated, every maximal
//! group of orthogonally adjacent mines is extracted, each group is reduced to
//! a translation-invariant shape, and shapes are tallied across many trials
//! into a frequency-ranked catalogue.

#![forbid(unsafe_code)]

/// Board generation, cluster extraction and the trial loop
pub mod algorithm;
/// Shape canonicalization, pattern counting and ranking
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Board storage and coordinates
pub mod spatial;

pub use io::error::{Result, SimulationError};
