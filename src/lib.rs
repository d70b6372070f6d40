//! Classic snake in the terminal.
//!
//! The crate is split into:
//! - Core game logic without any I/O or rendering dependencies (game module)
//! - Key-event translation (input module)
//! - TUI rendering (render module)
//! - Session counters shown next to the score (metrics module)
//! - The tick-driven application loop that owns the timers (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
