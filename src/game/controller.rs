use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::config::GameConfig;
use super::direction::Direction;
use super::food::{Food, GridFullError};
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Whether the round is currently being played
///
/// `Stopped` is the transient post-collision state: the snake and score are
/// already reset, and the next accepted steering input resumes play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Stopped,
}

/// What kind of collision ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfHit,
}

/// Result of a single logical tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened; the game is stopped
    Idle,
    /// The snake moved to a free cell
    Advanced,
    /// The snake moved onto the food
    AteFood,
    /// The snake crashed; the round was reset
    Collided(CollisionKind),
}

/// Orchestrates tick updates, steering, collisions and the score
///
/// Created once at startup; the snake and food are reset in place on game
/// over rather than recreated.
pub struct GameController {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: SmallRng,
    score: u32,
    status: GameStatus,
}

impl GameController {
    /// Create a controller with an entropy-seeded RNG
    pub fn new(config: &GameConfig) -> Result<Self, GridFullError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Create a controller with an explicit RNG, for deterministic tests
    pub fn with_rng(config: &GameConfig, mut rng: SmallRng) -> Result<Self, GridFullError> {
        let grid = Grid::new(config.cell_count);
        let snake = Snake::new(grid.center(), Direction::Right, config.initial_snake_length);
        let food = Food::spawn(&mut rng, &grid, snake.cells())?;

        Ok(Self {
            grid,
            snake,
            food,
            rng,
            score: 0,
            status: GameStatus::Running,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Execute one logical tick
    ///
    /// Moves the snake, then checks food, wall and self collisions in that
    /// order, short-circuiting on the first hit. A no-op while stopped.
    pub fn update(&mut self) -> Result<TickOutcome, GridFullError> {
        if self.status == GameStatus::Stopped {
            return Ok(TickOutcome::Idle);
        }

        self.snake.advance();
        let head = self.snake.head();

        if head == self.food.position() {
            self.food
                .relocate(&mut self.rng, &self.grid, self.snake.cells())?;
            self.snake.request_growth();
            self.score += 1;
            return Ok(TickOutcome::AteFood);
        }

        if !self.grid.contains(head) {
            self.game_over()?;
            return Ok(TickOutcome::Collided(CollisionKind::Wall));
        }

        if self.snake.hits_own_body() {
            self.game_over()?;
            return Ok(TickOutcome::Collided(CollisionKind::SelfHit));
        }

        Ok(TickOutcome::Advanced)
    }

    /// Apply a steering input
    ///
    /// An accepted input while stopped also resumes play; a rejected one
    /// (180-degree turn) leaves both direction and status untouched.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let accepted = self.snake.set_direction(direction);
        if accepted && self.status == GameStatus::Stopped {
            self.status = GameStatus::Running;
        }
        accepted
    }

    fn game_over(&mut self) -> Result<(), GridFullError> {
        self.snake.reset();
        self.score = 0;
        self.food
            .relocate(&mut self.rng, &self.grid, self.snake.cells())?;
        self.status = GameStatus::Stopped;
        Ok(())
    }
}
