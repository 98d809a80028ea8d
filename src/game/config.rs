use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells along each side of the square grid
    pub cell_count: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between logical ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_count: 25,
            initial_snake_length: 3,
            tick_interval_ms: 200,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid side length
    pub fn new(cell_count: usize) -> Self {
        Self {
            cell_count,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }
}
