//! Connected cluster extraction by depth-first traversal
//!
//! The board is scanned row by row. Every still-marked cell starts a new
//! traversal and becomes that cluster's reference cell. The traversal visits
//! cells in recursive pre-order over [`NEIGHBOUR_OFFSETS`], but keeps its own
//! frame stack so a cluster covering the whole board cannot overflow the call
//! stack.

use crate::spatial::coordinate::NEIGHBOUR_OFFSETS;
use crate::spatial::{Board, CellState, Coordinate};

/// Maximal group of orthogonally adjacent mines from one board
///
/// Cells are stored in visit order; the first cell is the reference cell the
/// traversal started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    cells: Vec<Coordinate>,
}

impl Cluster {
    /// Absolute cell positions in visit order
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Cell the traversal started from
    pub fn reference(&self) -> Option<Coordinate> {
        self.cells.first().copied()
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cluster has no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Traversal frame: a visited cell and the next neighbour direction to probe
type Frame = (Coordinate, usize);

/// Reusable traversal state for extracting clusters from many boards
#[derive(Debug, Default)]
pub struct ClusterExtractor {
    stack: Vec<Frame>,
}

impl ClusterExtractor {
    /// Create an extractor with an empty work list
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every cluster on the board, consuming its marked cells
    ///
    /// Clusters are returned in the order their reference cells appear in a
    /// row-major scan.
    pub fn extract(&mut self, board: &mut Board) -> Vec<Cluster> {
        let mut clusters = Vec::new();
        for pos in board.scan_order() {
            if board.get(pos) == CellState::Marked {
                clusters.push(self.collect(board, pos));
            }
        }
        clusters
    }

    /// Traverse the cluster containing `start`, which must be marked
    fn collect(&mut self, board: &mut Board, start: Coordinate) -> Cluster {
        self.stack.clear();
        let mut cells = Vec::new();

        board.set(start, CellState::Consumed);
        cells.push(start);
        self.stack.push((start, 0));

        while let Some(frame) = self.stack.last_mut() {
            let (cell, direction) = *frame;
            let Some(&offset) = NEIGHBOUR_OFFSETS.get(direction) else {
                self.stack.pop();
                continue;
            };
            frame.1 += 1;

            let neighbour = cell + offset;
            if board.get(neighbour) == CellState::Marked {
                board.set(neighbour, CellState::Consumed);
                cells.push(neighbour);
                self.stack.push((neighbour, 0));
            }
        }

        Cluster { cells }
    }
}

/// Collect every cluster on the board, consuming its marked cells
pub fn extract_clusters(board: &mut Board) -> Vec<Cluster> {
    ClusterExtractor::new().extract(board)
}
