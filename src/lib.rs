//! Detective Quest: Chronicles of the Mansion
//!
//! A detective text adventure where you explore an old mansion room by
//! room, collect the clues left behind, and accuse the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Walk the mansion's rooms, choosing left or right at
//!   every door. Each room hides at most one clue.
//! - **Evidence**: Clues are collected automatically on first visit and
//!   filed into your notebook in alphabetical order.
//! - **Accusation**: When you are done exploring, name a suspect. At least
//!   two clues must point at them for a guilty verdict.
//!
//! # Architecture
//!
//! - `game` - Core game logic, exploration state machine, accusation scoring
//! - `tui` - Terminal user interface with ratatui
//! - `data` - The room tree, the clue index, and the suspect directory

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Unknown room id: {0}")]
    UnknownRoom(usize),

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
