//! The mansion floor plan: a fixed binary tree of rooms
//!
//! Topology is built once by the scenario loader and never changes during
//! play; the only mutable piece of a room is its collected flag.

use super::Direction;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Longest room name kept at the load boundary, in bytes.
pub const MAX_NAME_BYTES: usize = 49;

/// Longest clue text kept at the load boundary, in bytes.
pub const MAX_CLUE_BYTES: usize = 99;

/// Handle to a room inside a [`RoomGraph`]
///
/// Only `RoomGraph::add_room` creates these, so a handle is always valid
/// for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// A single room of the mansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    name: String,
    clue: Option<String>,
    collected: bool,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue hidden in this room, if any. `None` means the room never
    /// held a clue, regardless of the collected flag.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Whether this room's clue has already been picked up.
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// True if neither door leads anywhere. Such a room is still a valid
    /// place to stand; the player has to walk back out via the exit command.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-backed binary tree of rooms
///
/// Rooms are stored in a flat vector and refer to each other by [`RoomId`].
/// Teardown is a single `Vec` drop; recursive traversals over the tree are
/// bounded by its depth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room with an optional clue. An empty clue string means the
    /// room holds no clue. Overlong names and clues are truncated, matching
    /// the fixed buffers of the classic console version.
    pub fn add_room(&mut self, name: &str, clue: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        let clue = truncated(clue, MAX_CLUE_BYTES);
        self.rooms.push(Room {
            name: truncated(name, MAX_NAME_BYTES).to_string(),
            clue: (!clue.is_empty()).then(|| clue.to_string()),
            collected: false,
            left: None,
            right: None,
        });
        id
    }

    /// Attach `child` behind one of `parent`'s doors. Fails if either id is
    /// foreign to this graph or the door is already connected; the floor
    /// plan is immutable once built.
    pub fn link(
        &mut self,
        parent: RoomId,
        direction: Direction,
        child: RoomId,
    ) -> Result<(), GameError> {
        if parent.0 >= self.rooms.len() {
            return Err(GameError::UnknownRoom(parent.0));
        }
        if child.0 >= self.rooms.len() {
            return Err(GameError::UnknownRoom(child.0));
        }
        let room = &mut self.rooms[parent.0];
        let slot = match direction {
            Direction::Left => &mut room.left,
            Direction::Right => &mut room.right,
        };
        if slot.is_some() {
            return Err(GameError::InvalidState(format!(
                "room '{}' already has a {} door",
                room.name, direction
            )));
        }
        *slot = Some(child);
        Ok(())
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Flip a room's collected flag. Monotonic: there is no way back to
    /// "not collected".
    pub fn mark_collected(&mut self, id: RoomId) {
        self.rooms[id.0].collected = true;
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Cut `s` down to at most `max_bytes`, backing up to a char boundary so
/// multi-byte text is never split mid-character.
fn truncated(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clue_means_no_clue() {
        let mut graph = RoomGraph::new();
        let id = graph.add_room("Porão", "");
        assert_eq!(graph.room(id).clue(), None);
        assert!(!graph.room(id).is_collected());
    }

    #[test]
    fn linking_builds_the_tree() {
        let mut graph = RoomGraph::new();
        let hall = graph.add_room("Hall", "");
        let left = graph.add_room("Sala", "");
        graph.link(hall, Direction::Left, left).unwrap();

        assert_eq!(graph.room(hall).child(Direction::Left), Some(left));
        assert_eq!(graph.room(hall).child(Direction::Right), None);
        assert!(graph.room(left).is_dead_end());
    }

    #[test]
    fn relinking_a_door_is_rejected() {
        let mut graph = RoomGraph::new();
        let hall = graph.add_room("Hall", "");
        let a = graph.add_room("A", "");
        let b = graph.add_room("B", "");
        graph.link(hall, Direction::Right, a).unwrap();
        assert!(graph.link(hall, Direction::Right, b).is_err());
    }

    #[test]
    fn foreign_id_is_rejected() {
        let mut graph = RoomGraph::new();
        let hall = graph.add_room("Hall", "");
        let mut other = RoomGraph::new();
        other.add_room("X", "");
        let foreign = other.add_room("Y", "");
        assert!(graph.link(hall, Direction::Left, foreign).is_err());
    }

    #[test]
    fn overlong_text_is_truncated_at_char_boundary() {
        let mut graph = RoomGraph::new();
        let long_name = "s".repeat(60);
        let long_clue = format!("{}é", "c".repeat(98));
        let id = graph.add_room(&long_name, &long_clue);

        assert_eq!(graph.room(id).name().len(), MAX_NAME_BYTES);
        // The two-byte 'é' straddles the 99-byte limit and is dropped whole.
        assert_eq!(graph.room(id).clue().unwrap().len(), 98);
    }

    #[test]
    fn collected_flag_is_monotonic() {
        let mut graph = RoomGraph::new();
        let id = graph.add_room("Hall", "Envelope");
        graph.mark_collected(id);
        graph.mark_collected(id);
        assert!(graph.room(id).is_collected());
    }
}
