//! Error types for simulation configuration, generation and report output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation operations
#[derive(Debug)]
pub enum SimulationError {
    /// More mines requested than the board has cells
    MineCountExceedsCapacity {
        /// Requested number of mines
        mine_count: usize,
        /// Number of cells on the board
        capacity: usize,
    },

    /// Simulation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rejection sampling gave up before placing every mine
    ///
    /// Only reachable when the mine count is close to the board area and the
    /// random source is badly unlucky or degenerate.
    GenerationStalled {
        /// Requested number of mines
        mine_count: usize,
        /// Mines placed before giving up
        placed: usize,
        /// Random draws made
        attempts: usize,
    },

    /// Worker pool could not be started
    ThreadPool {
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SimulationError {
    /// Whether the error stems from the run configuration rather than execution
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MineCountExceedsCapacity { .. } | Self::InvalidParameter { .. }
        )
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MineCountExceedsCapacity {
                mine_count,
                capacity,
            } => {
                write!(
                    f,
                    "Configuration error: {mine_count} mines do not fit on a board of {capacity} cells"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GenerationStalled {
                mine_count,
                placed,
                attempts,
            } => {
                write!(
                    f,
                    "Board generation stalled after {attempts} draws ({placed} of {mine_count} mines placed)"
                )
            }
            Self::ThreadPool { reason } => {
                write!(f, "Failed to start worker pool: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

impl From<rayon::ThreadPoolBuildError> for SimulationError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
