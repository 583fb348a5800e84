//! Board storage with cell lifecycle states and bounds-checked lookup
//!
//! Cells live in a single row-major `Array2` indexed `(row, col)`, so the
//! memory offset of `(x, y)` is `y * width + x`. Lookups outside the board
//! return [`CellState::OutOfBounds`] instead of failing, which lets the
//! cluster traversal probe neighbours without separate edge handling.

use ndarray::Array2;

use crate::spatial::coordinate::Coordinate;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// No mine
    #[default]
    Empty,
    /// Mine not yet assigned to a cluster
    Marked,
    /// Mine already collected into a cluster
    Consumed,
    /// Sentinel returned for positions outside the board, never stored
    OutOfBounds,
}

/// Axis-aligned bounding box over integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates `[x, y]` (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates `[x, y]` (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Smallest box enclosing every point, or `None` for an empty set
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        points.into_iter().fold(None, |bounds, point| {
            Some(bounds.map_or(
                Self {
                    min: [point.x, point.y],
                    max: [point.x, point.y],
                },
                |b: Self| Self {
                    min: [b.min[0].min(point.x), b.min[1].min(point.y)],
                    max: [b.max[0].max(point.x), b.max[1].max(point.y)],
                },
            ))
        })
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        (self.max[0] - self.min[0] + 1) as usize
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        (self.max[1] - self.min[1] + 1) as usize
    }
}

/// Fixed-size board of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<CellState>,
    width: usize,
    height: usize,
}

impl Board {
    /// Create a board with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), CellState::Empty),
            width,
            height,
        }
    }

    /// Create a board with the given positions marked
    ///
    /// Positions outside the board are ignored.
    pub fn with_marked(width: usize, height: usize, marked: &[Coordinate]) -> Self {
        let mut board = Self::new(width, height);
        for &pos in marked {
            board.set(pos, CellState::Marked);
        }
        board
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// State at a position, or [`CellState::OutOfBounds`] outside the board
    pub fn get(&self, pos: Coordinate) -> CellState {
        self.index(pos)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(CellState::OutOfBounds)
    }

    /// Overwrite the state at a position
    ///
    /// Returns `false` without touching the board when the position is
    /// outside it or the state is the out-of-bounds sentinel.
    pub fn set(&mut self, pos: Coordinate, state: CellState) -> bool {
        if state == CellState::OutOfBounds {
            return false;
        }
        match self.index(pos).and_then(|index| self.cells.get_mut(index)) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// Number of cells currently in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// All positions in the given state, in row-major order
    pub fn positions(&self, state: CellState) -> Vec<Coordinate> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| cell == state)
            .map(|((row, col), _)| Coordinate::new(col as i32, row as i32))
            .collect()
    }

    /// Row-major iterator over every position on the board
    pub fn scan_order(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |row| (0..width).map(move |col| Coordinate::new(col as i32, row as i32)))
    }

    fn index(&self, pos: Coordinate) -> Option<(usize, usize)> {
        let col = usize::try_from(pos.x).ok().filter(|&col| col < self.width)?;
        let row = usize::try_from(pos.y).ok().filter(|&row| row < self.height)?;
        Some((row, col))
    }
}
