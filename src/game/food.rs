use std::error::Error;
use std::fmt;

use rand::Rng;

use super::grid::{Grid, Position};

/// Food placement failed because every cell is occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFullError;

impl fmt::Display for GridFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell left to place food on")
    }
}

impl Error for GridFullError {}

/// The single food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Create food at an explicit position
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Create food on a random free cell
    pub fn spawn<R: Rng>(
        rng: &mut R,
        grid: &Grid,
        occupied: &[Position],
    ) -> Result<Self, GridFullError> {
        let mut food = Self::at(Position::new(0, 0));
        food.relocate(rng, grid, occupied)?;
        Ok(food)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a uniformly random cell not in `occupied`
    ///
    /// Rejection sampling: expected O(1) while the snake covers a small part
    /// of the grid, degrading as occupancy grows. A saturated grid is refused
    /// up front instead of spinning forever.
    pub fn relocate<R: Rng>(
        &mut self,
        rng: &mut R,
        grid: &Grid,
        occupied: &[Position],
    ) -> Result<(), GridFullError> {
        if occupied.len() >= grid.total_cells() {
            return Err(GridFullError);
        }

        loop {
            let pos = Position::new(
                rng.gen_range(0..grid.cell_count() as i32),
                rng.gen_range(0..grid.cell_count() as i32),
            );
            if !occupied.contains(&pos) {
                self.position = pos;
                return Ok(());
            }
        }
    }
}
