use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    config::GameConfig,
    direction::Direction,
    grid::{Cell, Grid},
    state::{CollisionType, Position, Snake},
};
use crate::error::Result;

/// Length of the snake at the start of every session
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Column of the initial head; the body trails to column 1
const INITIAL_HEAD_COLUMN: i32 = 3;

/// What a single call to [`GameEngine::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing happened because the game is paused or over
    Idle,
    /// The snake moved one cell without growing
    Moved,
    /// The snake ate food, grew by one and scored
    AteFood,
    /// The snake crashed and the game is now over
    Collision(CollisionType),
}

/// What the next head position would land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    OutOfBounds,
    Empty,
    Occupied,
    Food,
}

/// The game engine that owns one session's state and rules
#[derive(Debug)]
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    food: Option<Position>,
    score: u32,
    game_over: bool,
    paused: bool,
    seed: u64,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new session with a randomly seeded food sequence
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::with_seed(rows, columns, rand::random())
    }

    /// Create a new session whose food placement is fixed by `seed`
    pub fn with_seed(rows: usize, columns: usize, seed: u64) -> Result<Self> {
        GameConfig::new(rows, columns).validate()?;

        let head = Position::new((rows / 2) as i32, INITIAL_HEAD_COLUMN);
        let snake = Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH);

        let mut engine = Self::assemble(Grid::new(rows, columns), snake, Direction::Right, seed);
        engine.spawn_food();

        debug!(rows, columns, seed, food = ?engine.food, "new game");
        Ok(engine)
    }

    /// Create a new session from a configuration
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.rows, config.columns, seed),
            None => Self::new(config.rows, config.columns),
        }
    }

    fn assemble(mut grid: Grid, snake: Snake, direction: Direction, seed: u64) -> Self {
        for pos in snake.segments() {
            grid.set(pos, Cell::Occupied);
        }

        Self {
            grid,
            snake,
            direction,
            food: None,
            score: 0,
            game_over: false,
            paused: false,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Set the direction used by the next step.
    ///
    /// Reversing straight into the body is allowed and ends the game on
    /// the next step.
    pub fn change_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Advance the snake by one cell.
    ///
    /// Does nothing while the game is paused or over.
    pub fn step(&mut self) -> StepOutcome {
        if self.game_over || self.paused {
            return StepOutcome::Idle;
        }

        let new_head = self.snake.head().translate(self.direction);
        let target = self.classify(new_head);
        trace!(?new_head, ?target, "step");

        match target {
            Target::OutOfBounds => self.end_game(CollisionType::Wall),
            Target::Occupied => self.end_game(CollisionType::SelfCollision),
            Target::Empty => {
                let vacated = self.snake.advance(new_head);
                // Vacate first: the new head may be the old tail cell
                self.grid.set(vacated, Cell::Empty);
                self.grid.set(new_head, Cell::Occupied);
                StepOutcome::Moved
            }
            Target::Food => {
                self.snake.grow(new_head);
                self.grid.set(new_head, Cell::Occupied);
                self.food = None;
                self.score += 1;
                self.spawn_food();
                StepOutcome::AteFood
            }
        }
    }

    /// Work out what `pos` holds for the purpose of moving the head there
    fn classify(&self, pos: Position) -> Target {
        let Some(cell) = self.grid.get(pos) else {
            return Target::OutOfBounds;
        };

        // The tail moves out in the same tick
        if pos == self.snake.tail() {
            return Target::Empty;
        }

        match cell {
            Cell::Empty => Target::Empty,
            Cell::Occupied => Target::Occupied,
            Cell::Food => Target::Food,
        }
    }

    fn end_game(&mut self, collision: CollisionType) -> StepOutcome {
        self.game_over = true;
        info!(
            score = self.score,
            length = self.snake.len(),
            ?collision,
            "game over"
        );
        StepOutcome::Collision(collision)
    }

    /// Place food on a uniformly random empty cell, if there is one
    fn spawn_food(&mut self) {
        let empty = self.grid.positions_of(Cell::Empty);
        if empty.is_empty() {
            debug!(score = self.score, "grid full, no food placed");
            return;
        }

        let pos = empty[self.rng.gen_range(0..empty.len())];
        self.grid.set(pos, Cell::Food);
        self.food = Some(pos);
        debug!(?pos, candidates = empty.len(), "food placed");
    }

    pub fn head_position(&self) -> Position {
        self.snake.head()
    }

    pub fn tail_position(&self) -> Position {
        self.snake.tail()
    }

    /// Snake cells from head to tail
    pub fn snake_cells(&self) -> impl ExactSizeIterator<Item = Position> + Clone + '_ {
        self.snake.segments()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// The current food cell; `None` once the snake fills the grid
    pub fn food_position(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn current_direction(&self) -> Direction {
        self.direction
    }

    /// Seed of the food placement sequence, for replaying a session
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
