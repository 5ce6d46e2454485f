//! Scenario definitions for detective adventures
//!
//! A scenario is the data-loading boundary of the game: it supplies the
//! finished room tree and the static clue→suspect facts before exploration
//! begins. Nothing here runs during play.

use crate::data::{Direction, RoomGraph, RoomId, SuspectDirectory};
use crate::Result;

/// A complete case, ready to explore
#[derive(Debug, Clone)]
pub struct Scenario {
    pub title: &'static str,
    pub synopsis: &'static str,
    /// The mansion floor plan.
    pub graph: RoomGraph,
    /// Where the player starts.
    pub entry: RoomId,
    /// The static clue→suspect facts.
    pub directory: SuspectDirectory,
    /// Names the player may want to accuse, for the UI hint only; the
    /// accusation itself is free text.
    pub suspects: &'static [&'static str],
}

/// The classic case: a seven-room mansion, one clue per room.
pub fn create_mansion_scenario() -> Result<Scenario> {
    let mut graph = RoomGraph::new();
    let hall = graph.add_room("Hall de Entrada", "Envelope com um símbolo estranho");
    let living = graph.add_room("Sala de Estar", "Pegadas de lama perto do tapete");
    let library = graph.add_room("Biblioteca", "Página rasgada de diário");
    let kitchen = graph.add_room("Cozinha", "Chave dourada enferrujada");
    let dining = graph.add_room("Sala de Jantar", "Guardanapo com anotação");
    let guest = graph.add_room("Quarto de Hóspedes", "Meia caída sob a cama");
    let garden = graph.add_room("Jardim Interno", "Pegadas que levam para o muro");

    graph.link(hall, Direction::Left, living)?;
    graph.link(hall, Direction::Right, library)?;
    graph.link(living, Direction::Left, kitchen)?;
    graph.link(living, Direction::Right, dining)?;
    graph.link(library, Direction::Left, guest)?;
    graph.link(library, Direction::Right, garden)?;

    let mut directory = SuspectDirectory::new();
    directory.insert("Envelope com um símbolo estranho", "Sr. Black");
    directory.insert("Pegadas de lama perto do tapete", "Dr. Green");
    directory.insert("Chave dourada enferrujada", "Sr. Black");
    directory.insert("Página rasgada de diário", "Dr. Green");
    directory.insert("Guardanapo com anotação", "Srta. Scarlet");
    directory.insert("Meia caída sob a cama", "Srta. Scarlet");
    directory.insert("Pegadas que levam para o muro", "Sr. Black");

    Ok(Scenario {
        title: "O Caso da Mansão",
        synopsis: "A storm, a locked mansion, and seven rooms full of secrets. \
                   Someone in this house is not who they claim to be. Collect \
                   the clues, then name the culprit.",
        graph,
        entry: hall,
        directory,
        suspects: &["Sr. Black", "Dr. Green", "Srta. Scarlet"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ClueIndex;
    use crate::game::accusation::{resolve_accusation, Verdict};
    use crate::game::exploration::{Command, Exploration, MoveOutcome, VisitReport};

    #[test]
    fn mansion_has_seven_rooms_and_seven_facts() {
        let scenario = create_mansion_scenario().unwrap();
        assert_eq!(scenario.graph.len(), 7);
        assert_eq!(scenario.directory.len(), 7);
        assert_eq!(scenario.graph.room(scenario.entry).name(), "Hall de Entrada");
    }

    #[test]
    fn every_clue_has_a_fact_on_file() {
        let scenario = create_mansion_scenario().unwrap();
        // Breadth-first over the tree: every room holds a clue and every
        // clue resolves to a suspect.
        let mut pending = vec![scenario.entry];
        let mut seen = 0;
        while let Some(id) = pending.pop() {
            seen += 1;
            let room = scenario.graph.room(id);
            let clue = room.clue().expect("every room in this case has a clue");
            assert!(scenario.directory.lookup(clue).is_some(), "no fact for {clue:?}");
            for direction in [Direction::Left, Direction::Right] {
                if let Some(child) = room.child(direction) {
                    pending.push(child);
                }
            }
        }
        assert_eq!(seen, 7);
    }

    /// The canonical walk: hall, then left, then left again, then exit,
    /// accusing "Sr. Black".
    #[test]
    fn hall_left_left_convicts_sr_black() {
        let mut scenario = create_mansion_scenario().unwrap();
        let mut clues = ClueIndex::new();
        let mut exploration = Exploration::start(scenario.entry);

        assert_eq!(
            exploration.visit(&mut scenario.graph, &mut clues),
            VisitReport::ClueCollected("Envelope com um símbolo estranho".to_string())
        );
        for _ in 0..2 {
            assert!(matches!(
                exploration.command(&scenario.graph, Command::Left),
                MoveOutcome::Moved(_)
            ));
            assert!(matches!(
                exploration.visit(&mut scenario.graph, &mut clues),
                VisitReport::ClueCollected(_)
            ));
        }
        assert_eq!(
            exploration.command(&scenario.graph, Command::Exit),
            MoveOutcome::Ended
        );
        assert_eq!(clues.len(), 3);

        let result = resolve_accusation(&clues, &scenario.directory, "Sr. Black").unwrap();
        assert_eq!(result.tally, 2);
        assert_eq!(result.verdict, Verdict::Guilty);
    }

    /// Same walk, but the accused matches none of the collected clues.
    #[test]
    fn hall_left_left_cannot_convict_srta_scarlet() {
        let mut scenario = create_mansion_scenario().unwrap();
        let mut clues = ClueIndex::new();
        let mut exploration = Exploration::start(scenario.entry);

        exploration.visit(&mut scenario.graph, &mut clues);
        exploration.command(&scenario.graph, Command::Left);
        exploration.visit(&mut scenario.graph, &mut clues);
        exploration.command(&scenario.graph, Command::Left);
        exploration.visit(&mut scenario.graph, &mut clues);
        exploration.command(&scenario.graph, Command::Exit);

        let result = resolve_accusation(&clues, &scenario.directory, "Srta. Scarlet").unwrap();
        assert_eq!(result.tally, 0);
        assert_eq!(result.verdict, Verdict::InsufficientEvidence);
    }
}
