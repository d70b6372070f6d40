use super::{
    command::{Command, Direction},
    config::GameConfig,
    state::{GameState, GameStatus, Position, Snake},
};
use rand::Rng;

/// What killed the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Candidate head left the grid
    Wall,
    /// Candidate head landed on a body segment
    Body,
}

/// Result of one tick of the step engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake advanced one cell; `ate` is true if it consumed the food.
    Moved { ate: bool },
    /// The tick hit a termination condition; the game is now over.
    GameOver(CollisionKind),
    /// Step requested on a finished game; nothing changed.
    Halted,
}

/// Drives the game state, one tick at a time.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh game state: single-segment snake at the spawn cell heading
    /// right, score zero. `high_score` carries over from earlier runs in
    /// this process.
    pub fn reset(&mut self, high_score: u32) -> GameState {
        let (x, y) = self.config.spawn_cell();
        let snake = Snake::spawn(Position::new(x, y), Direction::Right);
        let food = self.spawn_food(snake.head());

        GameState::new(
            snake,
            food,
            self.config.grid_width,
            self.config.grid_height,
            high_score,
        )
    }

    /// Advance the game by one tick.
    ///
    /// Order matters and follows the classic rules: steer, compute the
    /// candidate head, resolve food (growth) or drop the tail (constant
    /// length), then check termination against the post-removal body so the
    /// cell the tail just vacated is a legal move.
    pub fn step(&mut self, state: &mut GameState, command: Command) -> StepOutcome {
        if !state.is_running() {
            return StepOutcome::Halted;
        }

        if let Command::Turn(requested) = command {
            if !state.snake.direction.is_opposite(requested) {
                state.snake.direction = requested;
            }
        }

        let candidate = state.snake.head().step(state.snake.direction);

        let ate = candidate == state.food;
        if ate {
            state.score += 1;
            if state.score > state.high_score {
                state.high_score = state.score;
            }
            state.food = self.spawn_food(candidate);
        } else {
            state.snake.drop_tail();
        }

        if !state.in_bounds(candidate) {
            state.status = GameStatus::GameOver;
            return StepOutcome::GameOver(CollisionKind::Wall);
        }
        if state.snake.hits_body(candidate) {
            state.status = GameStatus::GameOver;
            return StepOutcome::GameOver(CollisionKind::Body);
        }

        state.snake.push_head(candidate);
        StepOutcome::Moved { ate }
    }

    /// Uniformly random grid cell, independent per call. Cells under the
    /// snake body are NOT excluded (food can legally spawn beneath it);
    /// only `avoid` — the head cell, i.e. the food just consumed — is
    /// resampled so the regenerated food always differs from it.
    fn spawn_food(&mut self, avoid: Position) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.grid_width) as i32,
                self.rng.gen_range(0..self.config.grid_height) as i32,
            );

            if pos != avoid {
                return pos;
            }
        }
    }
}
