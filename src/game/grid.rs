use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The fixed square playing field: cell_count x cell_count cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_count: usize,
}

impl Grid {
    pub fn new(cell_count: usize) -> Self {
        Self { cell_count }
    }

    /// Number of cells along one side
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Total number of cells on the grid
    pub fn total_cells(&self) -> usize {
        self.cell_count * self.cell_count
    }

    /// The cell at the center of the grid
    pub fn center(&self) -> Position {
        let mid = (self.cell_count / 2) as i32;
        Position::new(mid, mid)
    }

    /// Check if a position lies within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.cell_count as i32
            && pos.y >= 0
            && pos.y < self.cell_count as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(
            pos.moved_in_direction(Direction::Up),
            Position::new(5, 4)
        );
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 19)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(0, 20)));
    }

    #[test]
    fn test_cell_totals() {
        let grid = Grid::new(25);
        assert_eq!(grid.cell_count(), 25);
        assert_eq!(grid.total_cells(), 625);
        assert_eq!(grid.center(), Position::new(12, 12));
    }
}
