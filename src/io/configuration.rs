//! Simulation constants and runtime configuration defaults

// Board defaults match the classic beginner layout
/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 9;
/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 9;
/// Default number of mines per board
pub const DEFAULT_MINES: usize = 10;

/// Default number of simulated boards
pub const DEFAULT_TRIALS: u64 = 100_000;

/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Default worker count (sequential execution)
pub const DEFAULT_THREADS: usize = 1;

/// Default report location
pub const DEFAULT_OUTPUT: &str = "patterns.txt";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 10_000;

/// Trials sharing one seeded random source
pub const TRIALS_PER_BATCH: u64 = 1024;

// Coupon collector needs about ln(area) draws per cell for a full board
/// Random draws allowed per board cell before generation is abandoned
pub const SAMPLING_ATTEMPTS_PER_CELL: usize = 64;
/// Lower bound on the draw limit for tiny boards
pub const MIN_SAMPLING_ATTEMPTS: usize = 1024;

// Report settings
/// Character drawn for a mine in rendered shapes
pub const MARKED_GLYPH: char = 'X';
/// Character drawn for an empty cell in rendered shapes
pub const EMPTY_GLYPH: char = ' ';
/// Decimal places printed for prevalence values
pub const PREVALENCE_PRECISION: usize = 6;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
