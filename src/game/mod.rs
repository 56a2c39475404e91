//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! The terminal front end drives it purely through [`GameEngine`]'s public methods.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, INITIAL_SNAKE_LENGTH, StepOutcome};
pub use grid::{Cell, Grid};
pub use state::{CollisionType, Position, Snake};
