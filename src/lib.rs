//! grid_snake - a terminal Snake arcade game
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food and the tick-driven
//!   controller, free of any I/O
//! - TUI rendering (render module) and keyboard input (input module)
//! - Terminal-bell sound cues (audio module)
//! - In-memory session stats (metrics module)
//! - The interactive event loop tying them together (app module)

pub mod app;
pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
