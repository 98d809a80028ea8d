//! Core game logic module for Snake
//!
//! Everything in here is free of I/O and rendering dependencies: the grid,
//! the snake's body queue, food placement and the tick-driven controller can
//! all be exercised programmatically.

pub mod config;
pub mod controller;
pub mod direction;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use controller::{CollisionKind, GameController, GameStatus, TickOutcome};
pub use direction::Direction;
pub use food::{Food, GridFullError};
pub use grid::{Grid, Position};
pub use snake::Snake;
