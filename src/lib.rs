//! Grid Snake - a grid-based Snake game
//!
//! This library provides:
//! - Core game engine: grid occupancy, movement, collisions, food placement (game module)
//! - Keyboard mapping for the terminal front end (input module)
//! - TUI rendering (render module)
//! - Per-process session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::{GameError, Result};
