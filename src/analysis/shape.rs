//! Translation-invariant cluster shapes
//!
//! A shape lists its cells as offsets from the cluster's reference cell, in
//! traversal visit order. The scan and traversal order depend only on the
//! cluster's own cells, so two clusters covering the same cells up to
//! translation always produce equal shapes. Rotations and reflections stay
//! distinct.

use crate::algorithm::extraction::Cluster;
use crate::spatial::{BoundingBox, Coordinate};

/// Cluster geometry as offsets from its reference cell
///
/// Equality and hashing are element-wise over the offset sequence, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    offsets: Vec<Coordinate>,
}

impl Shape {
    /// Wrap an offset sequence as-is
    pub const fn from_offsets(offsets: Vec<Coordinate>) -> Self {
        Self { offsets }
    }

    /// Canonicalize a cluster against its own reference cell
    pub fn from_cluster(cluster: &Cluster) -> Self {
        cluster.reference().map_or_else(Self::default, |reference| {
            canonicalize(cluster.cells(), reference)
        })
    }

    /// Offsets in visit order
    pub fn offsets(&self) -> &[Coordinate] {
        &self.offsets
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the shape has no cells
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Smallest box enclosing every offset, `None` for an empty shape
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.offsets.iter().copied())
    }
}

/// Express cells as offsets from `reference`, keeping their order
pub fn canonicalize(cells: &[Coordinate], reference: Coordinate) -> Shape {
    Shape {
        offsets: cells.iter().map(|&cell| cell - reference).collect(),
    }
}
