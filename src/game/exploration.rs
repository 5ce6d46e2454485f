//! Walking the mansion and collecting clues
//!
//! A two-state machine: `Exploring` while the current-room pointer is
//! valid, `Ended` once the player gives the exit command. Exiting is the
//! only way out; standing in a dead-end room is a normal state and the
//! player still has to choose to leave.

use crate::data::{ClueIndex, Direction, RoomGraph, RoomId};
use serde::{Deserialize, Serialize};

/// A single-character navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Left,
    Right,
    Exit,
}

impl Command {
    /// Parse a navigation key, case-insensitively. Anything unrecognized
    /// yields `None` and is handled by re-prompting; it never consumes a
    /// move.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Command::Left),
            'r' => Some(Command::Right),
            'x' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// What the player learns on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitReport {
    /// The room's clue was just collected into the notebook.
    ClueCollected(String),
    /// The room has a clue, but it was picked up on an earlier visit.
    AlreadyCollected,
    /// The room never held a clue.
    NothingHere,
}

/// Result of one navigation command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player walked through a door into the given room.
    Moved(RoomId),
    /// No door on that side; the player stays put.
    NoPath(Direction),
    /// The player left the mansion; exploration is over.
    Ended,
}

/// Exploration state machine over a [`RoomGraph`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exploration {
    current: RoomId,
    ended: bool,
}

impl Exploration {
    /// Begin exploring at the mansion's entry room.
    pub fn start(entry: RoomId) -> Self {
        Self {
            current: entry,
            ended: false,
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Visit the current room. On first entry into a room with a clue the
    /// clue is filed into the notebook and the room's flag is set; later
    /// entries report "already collected" without structural change.
    pub fn visit(&self, graph: &mut RoomGraph, clues: &mut ClueIndex) -> VisitReport {
        let room = graph.room(self.current);
        let clue = room.clue().map(str::to_owned);
        let collected = room.is_collected();
        match clue {
            None => VisitReport::NothingHere,
            Some(_) if collected => VisitReport::AlreadyCollected,
            Some(clue) => {
                clues.insert(&clue);
                graph.mark_collected(self.current);
                VisitReport::ClueCollected(clue)
            }
        }
    }

    /// Apply one navigation command. Walking toward a missing door reports
    /// `NoPath` and leaves the state untouched; the exit command is
    /// terminal.
    pub fn command(&mut self, graph: &RoomGraph, command: Command) -> MoveOutcome {
        match command {
            Command::Exit => {
                self.ended = true;
                MoveOutcome::Ended
            }
            Command::Left => self.step(graph, Direction::Left),
            Command::Right => self.step(graph, Direction::Right),
        }
    }

    fn step(&mut self, graph: &RoomGraph, direction: Direction) -> MoveOutcome {
        match graph.room(self.current).child(direction) {
            Some(next) => {
                self.current = next;
                MoveOutcome::Moved(next)
            }
            None => MoveOutcome::NoPath(direction),
        }
    }
}
