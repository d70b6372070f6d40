use super::command::Direction;

/// A grid-aligned coordinate. Signed so that one-past-the-edge candidate
/// head positions are representable before the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step away in `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: ordered body segments with the head at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// A single-segment snake at the spawn cell.
    pub fn spawn(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether `pos` hits any body segment. The front segment is skipped: a
    /// candidate head is always one cell away from it and can never
    /// coincide. The body may be transiently empty mid-tick, after the tail
    /// of a single-segment snake is dropped.
    pub fn hits_body(&self, pos: Position) -> bool {
        self.body.get(1..).map_or(false, |rest| rest.contains(&pos))
    }

    /// Drop the tail segment (constant-length movement).
    pub fn drop_tail(&mut self) {
        self.body.pop();
    }

    /// Make `head` the new front segment.
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }
}

/// Whether the game is still ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete game state, passed to the step engine and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Position,
        grid_width: usize,
        grid_height: usize,
        high_score: u32,
    ) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            high_score,
            status: GameStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }
}
