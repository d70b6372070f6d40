use serde::{Deserialize, Serialize};

/// Game parameters: grid extent and tick period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub grid_width: usize,
    /// Height of the grid in cells
    pub grid_height: usize,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            tick_ms: 150,
        }
    }
}

impl GameConfig {
    pub fn new(grid_width: usize, grid_height: usize, tick_ms: u64) -> Self {
        Self {
            grid_width,
            grid_height,
            tick_ms,
        }
    }

    /// Spawn cell for a fresh snake, slightly left of center so the initial
    /// rightward run has room.
    pub fn spawn_cell(&self) -> (i32, i32) {
        (self.grid_width as i32 / 2 - 1, self.grid_height as i32 / 2)
    }
}
