use serde::{Deserialize, Serialize};

use crate::error::{GameError, MAX_CELLS, MIN_COLUMNS, MIN_ROWS, Result};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Seed for food placement; `None` draws one from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 15,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Fix the food placement sequence
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the grid fits the initial snake plus one free cell, and
    /// that every cell is addressable by an `i32` position
    pub fn validate(&self) -> Result<()> {
        let too_small = self.rows < MIN_ROWS || self.columns < MIN_COLUMNS;
        let too_large = !matches!(
            self.rows.checked_mul(self.columns),
            Some(cells) if cells <= MAX_CELLS
        );
        if too_small || too_large {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 15);
        assert_eq!(config.columns, 15);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(8, 12).with_seed(7);
        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, 12);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_minimum_grid() {
        assert!(GameConfig::new(1, 4).validate().is_ok());
        assert_eq!(
            GameConfig::new(0, 10).validate(),
            Err(GameError::InvalidDimensions {
                rows: 0,
                columns: 10
            })
        );
        assert_eq!(
            GameConfig::new(10, 3).validate(),
            Err(GameError::InvalidDimensions {
                rows: 10,
                columns: 3
            })
        );
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        assert_eq!(
            GameConfig::new(MAX_CELLS + 1, 4).validate(),
            Err(GameError::InvalidDimensions {
                rows: MAX_CELLS + 1,
                columns: 4
            })
        );
        assert!(GameConfig::new(4, MAX_CELLS + 1).validate().is_err());
        assert!(GameConfig::new(MAX_CELLS / 2, 4).validate().is_err());

        // rows * columns overflows usize
        assert!(GameConfig::new(usize::MAX, usize::MAX).validate().is_err());
        assert!(GameConfig::new(usize::MAX / 2 + 1, 4).validate().is_err());

        assert!(GameConfig::new(MAX_CELLS / 4, 4).validate().is_ok());
    }
}
