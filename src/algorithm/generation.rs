//! Random board generation with an exact mine count
//!
//! Mines are placed by rejection sampling: a uniformly random cell is drawn
//! and marked when empty, otherwise the draw is discarded. The expected number
//! of draws grows sharply as the mine count approaches the board area, so the
//! loop is capped and reports [`SimulationError::GenerationStalled`] instead of
//! spinning forever on a degenerate random source.

use rand::Rng;

use crate::io::configuration::{
    MAX_BOARD_DIMENSION, MIN_SAMPLING_ATTEMPTS, SAMPLING_ATTEMPTS_PER_CELL,
};
use crate::io::error::{Result, SimulationError, invalid_parameter};
use crate::spatial::{Board, CellState, Coordinate};

/// Validated board parameters that produce fresh random boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    width: usize,
    height: usize,
    mine_count: usize,
    attempt_limit: usize,
}

impl BoardGenerator {
    /// Validate board parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds `MAX_BOARD_DIMENSION`
    /// - The mine count exceeds the number of cells
    pub fn new(width: usize, height: usize, mine_count: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let capacity = width * height;
        if mine_count > capacity {
            return Err(SimulationError::MineCountExceedsCapacity {
                mine_count,
                capacity,
            });
        }

        Ok(Self {
            width,
            height,
            mine_count,
            attempt_limit: sampling_attempt_limit(capacity),
        })
    }

    /// Board width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Mines placed on every generated board
    pub const fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Produce one board with exactly `mine_count` marked cells
    ///
    /// # Errors
    ///
    /// Returns `GenerationStalled` if the draw limit is reached before every
    /// mine is placed
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board> {
        let mut board = Board::new(self.width, self.height);
        let mut placed = 0;
        let mut attempts = 0;

        while placed < self.mine_count {
            if attempts >= self.attempt_limit {
                return Err(SimulationError::GenerationStalled {
                    mine_count: self.mine_count,
                    placed,
                    attempts,
                });
            }
            attempts += 1;

            let pos = Coordinate::new(
                rng.random_range(0..self.width) as i32,
                rng.random_range(0..self.height) as i32,
            );
            if board.get(pos) == CellState::Empty {
                board.set(pos, CellState::Marked);
                placed += 1;
            }
        }

        Ok(board)
    }
}

/// Validate parameters and produce a single board
///
/// # Errors
///
/// Returns an error if the parameters are invalid (see [`BoardGenerator::new`])
/// or if sampling stalls
pub fn generate_board<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    mine_count: usize,
    rng: &mut R,
) -> Result<Board> {
    BoardGenerator::new(width, height, mine_count)?.generate(rng)
}

/// Maximum random draws allowed for a board of the given area
pub const fn sampling_attempt_limit(area: usize) -> usize {
    let limit = area.saturating_mul(SAMPLING_ATTEMPTS_PER_CELL);
    if limit < MIN_SAMPLING_ATTEMPTS {
        MIN_SAMPLING_ATTEMPTS
    } else {
        limit
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_BOARD_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_BOARD_DIMENSION}"),
        ));
    }
    Ok(())
}
