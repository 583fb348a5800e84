//! Integer board coordinates and the orthogonal neighbourhood used by cluster traversal

use std::fmt;
use std::ops::{Add, Sub};

/// Integer position or offset on a board
///
/// `x` grows to the right and `y` grows downward, matching the row-major
/// layout of [`crate::spatial::Board`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

/// The zero offset, which every canonical shape starts with
pub const ORIGIN: Coordinate = Coordinate::new(0, 0);

/// Orthogonal neighbour offsets in traversal order: left, right, up, down
///
/// The order decides how cells are appended to a cluster, and therefore the
/// identity of order-sensitive shapes. Changing it changes every report.
pub const NEIGHBOUR_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(-1, 0),
    Coordinate::new(1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
];

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours in traversal order
    pub fn neighbours(self) -> impl Iterator<Item = Self> {
        NEIGHBOUR_OFFSETS.into_iter().map(move |offset| self + offset)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
