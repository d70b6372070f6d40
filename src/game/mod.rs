//! Core game logic for snake.
//!
//! Everything in here is pure state manipulation: the application loop owns
//! the timer and feeds commands in, the renderer reads snapshots out.

pub mod command;
pub mod config;
pub mod engine;
pub mod state;

pub use command::{Command, Direction};
pub use config::GameConfig;
pub use engine::{CollisionKind, GameEngine, StepOutcome};
pub use state::{GameState, GameStatus, Position, Snake};
