use super::direction::Direction;
use super::grid::Position;

/// The player-controlled snake
///
/// Body segments are stored head-first; length never drops below 1. The body
/// carries no bounds knowledge of its own: moving off the grid is legal here
/// and policed by the controller's collision checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    pending_growth: bool,
    spawn_head: Position,
    spawn_direction: Direction,
    spawn_length: usize,
}

impl Snake {
    /// Create a snake with its head at `head`, extending `length` cells
    /// opposite to `direction`. The spawn is remembered for `reset`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut snake = Self {
            body: Vec::new(),
            direction,
            pending_growth: false,
            spawn_head: head,
            spawn_direction: direction,
            spawn_length: length.max(1),
        };
        snake.reset();
        snake
    }

    /// Restore the spawn body and direction, clearing any pending growth
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.spawn_head);

        let (dx, dy) = self.spawn_direction.delta();
        for i in 1..self.spawn_length {
            let prev = self.body[i - 1];
            self.body.push(prev.moved_by(-dx, -dy));
        }

        self.direction = self.spawn_direction;
        self.pending_growth = false;
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body cells, head first
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Current movement direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Check if a position is occupied by any segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check if the head re-occurs in the rest of the body
    pub fn hits_own_body(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// Advance one cell in the current direction
    ///
    /// Inserts the new head at the front; consumes the pending-growth flag to
    /// keep the tail (net +1), otherwise pops it (net 0).
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
    }

    /// Arm the one-shot growth flag, consumed by the next `advance`
    pub fn request_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Steer the snake; a 180-degree turn is silently ignored
    ///
    /// Returns whether the input was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(6, 9), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 9));
        assert_eq!(snake.cells()[1], Position::new(5, 9));
        assert_eq!(snake.cells()[2], Position::new(4, 9));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.cells()[2], Position::new(4, 5));
    }

    #[test]
    fn test_advance_with_pending_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.request_growth();
        snake.advance();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 5));

        // Flag is one-shot
        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_steering_lock() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);

        assert!(!snake.set_direction(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);

        // Same direction is not a reversal
        assert!(snake.set_direction(Direction::Up));
    }

    #[test]
    fn test_self_collision_detection() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.hits_own_body());

        // Head re-entering a prior segment
        snake.body = vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(5, 5),
        ];
        assert!(snake.hits_own_body());
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut snake = Snake::new(Position::new(6, 9), Direction::Right, 3);
        snake.set_direction(Direction::Down);
        snake.request_growth();
        snake.advance();
        snake.advance();
        assert_eq!(snake.len(), 4);

        snake.reset();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 9));
        assert_eq!(snake.direction(), Direction::Right);

        // Pending growth was cleared by the reset
        snake.advance();
        assert_eq!(snake.len(), 3);
    }
}
