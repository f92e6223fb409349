//! Error types for the minimax crate

use thiserror::Error;

/// Main error type for the minimax crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has the wrong number of cells: expected {expected}, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
