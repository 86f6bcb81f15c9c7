//! Error types for board and solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// A coordinate, region id, or size outside its valid range
    ///
    /// Recoverable: the caller chose the value and can choose again.
    OutOfRange {
        /// What kind of value was out of range
        what: &'static str,
        /// Provided value that failed validation
        value: usize,
        /// Exclusive upper bound for the value
        limit: usize,
    },

    /// A queen placement targeting an excluded cell
    ///
    /// The deduction rules only place queens on cells they have proven
    /// viable, so this occurring means a rule is unsound, not that the
    /// caller's puzzle is bad.
    InvalidPlacement {
        /// Row of the rejected placement
        row: usize,
        /// Column of the rejected placement
        col: usize,
    },

    /// Puzzle file contents that do not describe a valid board
    InvalidPuzzle {
        /// Path to the puzzle file
        path: PathBuf,
        /// Description of what is wrong with the contents
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

    /// Failed to save a rendered board or solve animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { what, value, limit } => {
                write!(f, "Invalid {what} {value}: must be less than {limit}")
            }
            Self::InvalidPlacement { row, col } => {
                write!(
                    f,
                    "Internal consistency error: queen placed on excluded cell ({row}, {col})"
                )
            }
            Self::InvalidPuzzle { path, reason } => {
                write!(f, "Invalid puzzle '{}': {reason}", path.display())
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid puzzle error
pub fn invalid_puzzle(path: impl Into<PathBuf>, reason: impl ToString) -> SolverError {
    SolverError::InvalidPuzzle {
        path: path.into(),
        reason: reason.to_string(),
    }
}
