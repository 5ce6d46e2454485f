//! Data structures for the game world
//!
//! Defines the room tree, the clue index, and the suspect directory.

pub mod clue_index;
pub mod room;
pub mod suspect_directory;

pub use clue_index::*;
pub use room::*;
pub use suspect_directory::*;

use serde::{Deserialize, Serialize};

/// Which way the player can move from a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Kinds of messages shown in the narration log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Discovery,
    Warning,
    Verdict,
}

impl MessageKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            MessageKind::Info => "ℹ",
            MessageKind::Discovery => "◆",
            MessageKind::Warning => "▲",
            MessageKind::Verdict => "⬤",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Info => write!(f, "INFO"),
            MessageKind::Discovery => write!(f, "CLUE"),
            MessageKind::Warning => write!(f, "WARN"),
            MessageKind::Verdict => write!(f, "CASE"),
        }
    }
}
