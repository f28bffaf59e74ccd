use thiserror::Error;

use crate::position::Position;

/// Convenient result alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of the search engine. An unreachable goal is not an error, it is
/// reported as an empty [Path](crate::path::Path).
#[derive(Debug, Error)]
pub enum Error {
    /// No start position has been placed on the grid.
    #[error("no start position has been placed")]
    MissingStart,

    /// No goal position has been placed on the grid.
    #[error("no goal position has been placed")]
    MissingGoal,

    /// A grid mutation targeted a position outside the grid.
    #[error("position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// A textual grid could not be parsed.
    #[error("invalid grid text on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An algorithm name did not match any known search.
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Wrapper for IO errors raised while writing run logs.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
