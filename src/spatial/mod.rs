//! Spatial data structures for boards and positions
//!
//! This module contains:
//! - Integer coordinates and the orthogonal neighbourhood
//! - Board storage with bounds-checked cell lookup

/// Integer coordinates and neighbour offsets
pub mod coordinate;
/// Board storage and cell states
pub mod grid;

pub use coordinate::Coordinate;
pub use grid::{Board, BoundingBox, CellState};
