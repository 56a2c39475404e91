//! Error types for the snake engine.

use thiserror::Error;

/// Smallest grid that fits the initial 3-cell snake plus one free cell.
pub const MIN_ROWS: usize = 1;
pub const MIN_COLUMNS: usize = 4;
/// Largest cell count; positions are `i32` row/column pairs.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// Errors surfaced by the engine.
///
/// Collisions and a full grid are ordinary game outcomes and never show
/// up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested grid cannot hold the initial snake, or is too big to address.
    #[error(
        "invalid grid dimensions {rows}x{columns}: need at least 1 row, 4 columns and at most 2147483647 cells"
    )]
    InvalidDimensions { rows: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = GameError::InvalidDimensions {
            rows: 0,
            columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid grid dimensions 0x3: need at least 1 row, 4 columns and at most 2147483647 cells"
        );
    }
}
