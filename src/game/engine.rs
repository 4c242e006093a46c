use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use super::{
    action::{Direction, Heading},
    collectible::CollectibleKind,
    config::{GameConfig, ResetHeading, SpawnPolicy},
    state::{Cut, GameState, Grid, Movement, Position, Snake},
};

/// Everything that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub movement: Movement,
    /// The snake ended the step on the apple
    pub ate_apple: bool,
    /// Set when the snake ended the step on the rotten apple
    pub cut: Option<Cut>,
}

impl TickReport {
    /// Whether the snake had to start over this tick
    pub fn was_reset(&self) -> bool {
        matches!(self.movement, Movement::Collided { .. }) || self.cut == Some(Cut::Exhausted)
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing its randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Set up a fresh game: a one-cell snake in the middle heading right,
    /// and both apples somewhere on the field
    pub fn new_game(&mut self) -> GameState {
        let grid = self.config.grid();
        let center = grid.center();
        let snake = Snake::new(center, Direction::Right);

        let mut state = GameState::new(snake, center, center, grid);
        self.relocate(&mut state, CollectibleKind::Grows);
        self.relocate(&mut state, CollectibleKind::Shrinks);
        state
    }

    /// Execute one step of the game: move, then let the snake eat whatever
    /// it ends up on.
    pub fn tick(&mut self, state: &mut GameState) -> TickReport {
        let movement = self.advance(state);

        let ate_apple = state.snake.occupies(state.apple.position);
        if ate_apple {
            state.snake.grow();
            let next = self.relocate(state, CollectibleKind::Grows);
            debug!(
                "apple eaten, target length {}, apple moved to {:?}",
                state.snake.target_length, next
            );
        }

        let cut = if state.snake.occupies(state.rotten_apple.position) {
            let cut = self.cut(state);
            let next = self.relocate(state, CollectibleKind::Shrinks);
            debug!("rotten apple eaten ({cut:?}), rotten apple moved to {next:?}");
            Some(cut)
        } else {
            None
        };

        state.ticks += 1;

        TickReport {
            movement,
            ate_apple,
            cut,
        }
    }

    /// Move the snake one cell, resetting it if it runs into itself
    pub fn advance(&mut self, state: &mut GameState) -> Movement {
        let movement = state.snake.advance(&state.grid);

        if let Movement::Collided { at } = movement {
            let (x, y) = state.grid.to_pixels(at);
            debug!(
                "self-collision at ({x}, {y}) with length {}",
                state.snake.len()
            );
            self.reset(state);
        }

        movement
    }

    /// Shrink the snake by one, or reset it if there is nothing left to lose
    pub fn cut(&mut self, state: &mut GameState) -> Cut {
        let cut = state.snake.cut();
        if cut == Cut::Exhausted {
            debug!("cut at length one, starting over");
            self.reset(state);
        }
        cut
    }

    /// Put the snake back to a single cell in the middle of the field with a
    /// freshly drawn heading
    pub fn reset(&mut self, state: &mut GameState) {
        let heading = self.reset_heading();
        state.snake.respawn(state.grid.center(), heading);
    }

    /// Move a collectible to a new random cell and return where it went
    pub fn relocate(&mut self, state: &mut GameState, kind: CollectibleKind) -> Position {
        let grid = state.grid;
        let position = match self.config.spawn_policy {
            SpawnPolicy::Anywhere => self.random_cell(grid),
            SpawnPolicy::AvoidOccupied => {
                let other = state.collectible(kind.other()).position;
                let free: Vec<Position> = grid
                    .cells()
                    .filter(|&cell| cell != other && !state.snake.occupies(cell))
                    .collect();
                match free.choose(&mut self.rng) {
                    Some(&cell) => cell,
                    None => self.random_cell(grid),
                }
            }
        };

        state.collectible_mut(kind).position = position;
        position
    }

    fn reset_heading(&mut self) -> Heading {
        match self.config.reset_heading {
            ResetHeading::Scatter => {
                Heading::new(self.rng.gen_range(-1..=1), self.rng.gen_range(-1..=1))
            }
            ResetHeading::Cardinal => {
                Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())].into()
            }
        }
    }

    fn random_cell(&mut self, grid: Grid) -> Position {
        let x = self.rng.gen_range(0..grid.width) as i32;
        let y = self.rng.gen_range(0..grid.height) as i32;
        Position::new(x, y)
    }
}
