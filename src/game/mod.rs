//! Core game logic and state management

pub mod accusation;
pub mod exploration;
pub mod scenario;

use crate::data::{ClueIndex, MessageKind, RoomGraph, SuspectDirectory};
use crate::Result;
use accusation::{resolve_accusation, AccusationResult, Verdict, GUILT_THRESHOLD};
use chrono::{DateTime, Utc};
use exploration::{Command, Exploration, MoveOutcome, VisitReport};
use serde::{Deserialize, Serialize};

/// The main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// Case title, from the scenario
    pub title: String,

    /// Case synopsis, shown on the briefing panel
    pub synopsis: String,

    /// The mansion being explored
    pub graph: RoomGraph,

    /// The investigation notebook
    pub clues: ClueIndex,

    /// Static clue→suspect facts
    pub directory: SuspectDirectory,

    /// Navigation state machine
    pub exploration: Exploration,

    /// Names suggested to the player on the accusation screen
    pub suspects: Vec<String>,

    /// Result of the accusation, once one was scored
    pub result: Option<AccusationResult>,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,
}

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,           // Walking the mansion, collecting clues
    Accusing,            // Typing the suspect's name
    CaseClosed(CaseOutcome),
}

/// How the case ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseOutcome {
    Guilty,              // Enough clues point at the accused
    InsufficientEvidence,
    Abandoned,           // Blank accusation; no verdict was issued
}

/// Game statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_visited: u32,
    pub clues_collected: u32,
    pub wrong_turns: u32,
    pub invalid_commands: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub text: String,
}

impl GameMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }
}

impl Game {
    /// Start the classic mansion case.
    pub fn new() -> Result<Self> {
        Ok(Self::with_scenario(scenario::create_mansion_scenario()?))
    }

    /// Start a specific case. The scenario supplies the room tree and the
    /// suspect facts; the entry room is visited right away.
    pub fn with_scenario(scenario: scenario::Scenario) -> Self {
        let exploration = Exploration::start(scenario.entry);

        let mut game = Self {
            phase: GamePhase::Exploring,
            title: scenario.title.to_string(),
            synopsis: scenario.synopsis.to_string(),
            graph: scenario.graph,
            clues: ClueIndex::new(),
            directory: scenario.directory,
            exploration,
            suspects: scenario.suspects.iter().map(|s| s.to_string()).collect(),
            result: None,
            stats: GameStats::default(),
            message_log: Vec::new(),
        };

        game.add_message(GameMessage::info(
            "Welcome to Detective Quest. The mansion door closes behind you...",
        ));
        game.stats.rooms_visited += 1;
        game.report_entry();
        game
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    /// Name of the room the player is standing in.
    pub fn current_room_name(&self) -> &str {
        self.graph.room(self.exploration.current_room()).name()
    }

    /// Collected clues in ascending order, for UI display.
    pub fn collected_clues(&self) -> Vec<String> {
        self.clues.iter().map(str::to_owned).collect()
    }

    /// Feed one navigation key to the exploration state machine. Only
    /// meaningful while exploring; unrecognized keys are reported and
    /// consume nothing.
    pub fn handle_key(&mut self, key: char) {
        if self.phase != GamePhase::Exploring {
            return;
        }
        let Some(command) = Command::from_char(key) else {
            self.stats.invalid_commands += 1;
            self.add_message(GameMessage::new(
                MessageKind::Warning,
                format!("'{key}' is not an option. Use (l)eft, (r)ight or e(x)it."),
            ));
            return;
        };

        match self.exploration.command(&self.graph, command) {
            MoveOutcome::Moved(_) => {
                self.stats.rooms_visited += 1;
                self.report_entry();
            }
            MoveOutcome::NoPath(direction) => {
                self.stats.wrong_turns += 1;
                self.add_message(GameMessage::new(
                    MessageKind::Warning,
                    format!("There is no room to the {direction}. Choose another path."),
                ));
                // The turn is spent standing in place; the room narrates
                // again, so a clue taken earlier reads "already collected".
                self.report_entry();
            }
            MoveOutcome::Ended => {
                self.phase = GamePhase::Accusing;
                self.add_message(GameMessage::info(
                    "You step out of the mansion and open your notebook.",
                ));
                self.report_notebook();
            }
        }
    }

    /// Score the typed accusation and close the case. A blank name aborts:
    /// no tally, no verdict.
    pub fn submit_accusation(&mut self, submitted: &str) {
        if self.phase != GamePhase::Accusing {
            return;
        }
        match resolve_accusation(&self.clues, &self.directory, submitted) {
            None => {
                self.phase = GamePhase::CaseClosed(CaseOutcome::Abandoned);
                self.add_message(GameMessage::new(
                    MessageKind::Warning,
                    "No name given. The case file is closed unsolved.",
                ));
            }
            Some(result) => {
                let outcome = match result.verdict {
                    Verdict::Guilty => CaseOutcome::Guilty,
                    Verdict::InsufficientEvidence => CaseOutcome::InsufficientEvidence,
                };
                self.phase = GamePhase::CaseClosed(outcome);
                self.add_message(GameMessage::new(
                    MessageKind::Verdict,
                    match result.verdict {
                        Verdict::Guilty => format!(
                            "{} clue(s) point at {}. Guilty!",
                            result.tally, result.accused
                        ),
                        Verdict::InsufficientEvidence => format!(
                            "Only {} clue(s) point at {}. Insufficient evidence (need {}).",
                            result.tally, result.accused, GUILT_THRESHOLD
                        ),
                    },
                ));
                self.result = Some(result);
            }
        }
    }

    /// Narrate the current room, with the three-way clue report. Runs on
    /// every turn spent in a room, whether the player just arrived or a
    /// failed move kept them there.
    fn report_entry(&mut self) {
        let name = self.current_room_name().to_string();
        self.add_message(GameMessage::info(format!("You are in: {name}")));

        match self.exploration.visit(&mut self.graph, &mut self.clues) {
            VisitReport::ClueCollected(clue) => {
                self.stats.clues_collected += 1;
                self.add_message(GameMessage::new(
                    MessageKind::Discovery,
                    format!("Clue found: \"{clue}\". Filed in your notebook."),
                ));
            }
            VisitReport::AlreadyCollected => {
                self.add_message(GameMessage::info(
                    "You already collected the clue in this room.",
                ));
            }
            VisitReport::NothingHere => {
                self.add_message(GameMessage::info("There is no clue in this room."));
            }
        }
    }

    /// Narrate the notebook listing shown when exploration ends.
    fn report_notebook(&mut self) {
        if self.clues.is_empty() {
            self.add_message(GameMessage::info("Your notebook is empty."));
            return;
        }
        for clue in self.collected_clues() {
            self.add_message(GameMessage::new(MessageKind::Discovery, format!("- {clue}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_visits_the_hall() {
        let game = Game::new().unwrap();
        assert_eq!(game.phase, GamePhase::Exploring);
        assert_eq!(game.current_room_name(), "Hall de Entrada");
        assert_eq!(game.stats.clues_collected, 1);
        assert!(game.clues.contains("Envelope com um símbolo estranho"));
    }

    #[test]
    fn unknown_key_is_recoverable() {
        let mut game = Game::new().unwrap();
        let room = game.current_room_name().to_string();
        game.handle_key('?');
        assert_eq!(game.current_room_name(), room);
        assert_eq!(game.phase, GamePhase::Exploring);
        assert_eq!(game.stats.invalid_commands, 1);
    }

    #[test]
    fn wrong_turn_is_reported_not_fatal() {
        let mut game = Game::new().unwrap();
        // Hall -> Sala de Estar -> Cozinha, a dead end.
        game.handle_key('l');
        game.handle_key('l');
        assert_eq!(game.current_room_name(), "Cozinha");
        game.handle_key('r');
        assert_eq!(game.current_room_name(), "Cozinha");
        assert_eq!(game.stats.wrong_turns, 1);
    }

    #[test]
    fn full_case_ends_guilty_for_sr_black() {
        let mut game = Game::new().unwrap();
        game.handle_key('l');
        game.handle_key('l');
        game.handle_key('x');
        assert_eq!(game.phase, GamePhase::Accusing);

        game.submit_accusation("Sr. Black");
        assert_eq!(game.phase, GamePhase::CaseClosed(CaseOutcome::Guilty));
        let result = game.result.unwrap();
        assert_eq!(result.tally, 2);
    }

    #[test]
    fn blank_accusation_abandons_the_case() {
        let mut game = Game::new().unwrap();
        game.handle_key('x');
        game.submit_accusation("  ");
        assert_eq!(game.phase, GamePhase::CaseClosed(CaseOutcome::Abandoned));
        assert!(game.result.is_none());
    }

    #[test]
    fn failed_move_renarrates_already_collected() {
        let mut game = Game::new().unwrap();
        // Hall -> Sala de Estar -> Cozinha; every clue on the way is taken.
        game.handle_key('l');
        game.handle_key('l');
        assert_eq!(game.current_room_name(), "Cozinha");
        let clues_before = game.clues.len();

        // Cozinha has no left door. The player stays, the room narrates
        // again, and its clue now reads as already collected.
        game.handle_key('l');
        assert!(game
            .message_log
            .iter()
            .any(|m| m.text.contains("no room to the left")));
        assert!(game
            .message_log
            .iter()
            .any(|m| m.text.contains("already collected")));
        assert_eq!(game.clues.len(), clues_before);
        assert_eq!(game.phase, GamePhase::Exploring);
    }

    #[test]
    fn empty_notebook_is_reported_on_exit() {
        let mut graph = RoomGraph::new();
        let entry = graph.add_room("Porão", "");
        let mut game = Game::with_scenario(scenario::Scenario {
            title: "O Caso Vazio",
            synopsis: "A cellar with nothing in it.",
            graph,
            entry,
            directory: SuspectDirectory::new(),
            suspects: &[],
        });
        assert_eq!(game.stats.clues_collected, 0);

        game.handle_key('x');
        assert_eq!(game.phase, GamePhase::Accusing);
        assert!(game
            .message_log
            .iter()
            .any(|m| m.text == "Your notebook is empty."));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut game = Game::new().unwrap();
        game.handle_key('L');
        assert_eq!(game.current_room_name(), "Sala de Estar");
        game.handle_key('X');
        assert_eq!(game.phase, GamePhase::Accusing);
    }
}
