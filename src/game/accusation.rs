//! Scoring the final accusation against the collected evidence

use crate::data::{ClueIndex, SuspectDirectory};
use serde::{Deserialize, Serialize};

/// Matching clues required to convict. A fixed design constant of the
/// case, not user-configurable.
pub const GUILT_THRESHOLD: u32 = 2;

/// The judgement on a non-aborted accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Guilty,
    InsufficientEvidence,
}

/// Outcome of scoring an accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccusationResult {
    pub accused: String,
    /// How many collected clues point at the accused.
    pub tally: u32,
    pub verdict: Verdict,
    /// Every collected clue in ascending order, paired with the suspect it
    /// points to. `None` when the directory holds no fact for the clue.
    pub evidence: Vec<(String, Option<String>)>,
}

/// Tally how many collected clues incriminate `submitted` and issue a
/// verdict.
///
/// The submitted name has its trailing line terminator stripped and is
/// otherwise compared case-sensitively, with no normalization. A name that
/// is empty or blank after stripping aborts the accusation: no tally is
/// computed and no verdict is issued (`None`). Clues without a directory
/// fact contribute zero; a lookup miss is not an error.
pub fn resolve_accusation(
    clues: &ClueIndex,
    directory: &SuspectDirectory,
    submitted: &str,
) -> Option<AccusationResult> {
    let accused = submitted.trim_end_matches(['\r', '\n']);
    if accused.trim().is_empty() {
        return None;
    }

    let mut tally = 0;
    let mut evidence = Vec::with_capacity(clues.len());
    for clue in clues {
        let suspect = directory.lookup(clue);
        if suspect == Some(accused) {
            tally += 1;
        }
        evidence.push((clue.to_string(), suspect.map(str::to_owned)));
    }

    let verdict = if tally >= GUILT_THRESHOLD {
        Verdict::Guilty
    } else {
        Verdict::InsufficientEvidence
    };

    Some(AccusationResult {
        accused: accused.to_string(),
        tally,
        verdict,
        evidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_files() -> (ClueIndex, SuspectDirectory) {
        let mut clues = ClueIndex::new();
        clues.insert("Envelope com um símbolo estranho");
        clues.insert("Pegadas de lama perto do tapete");
        clues.insert("Chave dourada enferrujada");

        let mut directory = SuspectDirectory::new();
        directory.insert("Envelope com um símbolo estranho", "Sr. Black");
        directory.insert("Pegadas de lama perto do tapete", "Dr. Green");
        directory.insert("Chave dourada enferrujada", "Sr. Black");
        (clues, directory)
    }

    #[test]
    fn two_matching_clues_convict() {
        let (clues, directory) = case_files();
        let result = resolve_accusation(&clues, &directory, "Sr. Black").unwrap();
        assert_eq!(result.tally, 2);
        assert_eq!(result.verdict, Verdict::Guilty);
        assert_eq!(result.accused, "Sr. Black");
    }

    #[test]
    fn one_matching_clue_is_not_enough() {
        let (clues, directory) = case_files();
        let result = resolve_accusation(&clues, &directory, "Dr. Green").unwrap();
        assert_eq!(result.tally, 1);
        assert_eq!(result.verdict, Verdict::InsufficientEvidence);
    }

    #[test]
    fn unrelated_suspect_tallies_zero() {
        let (clues, directory) = case_files();
        let result = resolve_accusation(&clues, &directory, "Srta. Scarlet").unwrap();
        assert_eq!(result.tally, 0);
        assert_eq!(result.verdict, Verdict::InsufficientEvidence);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let (clues, directory) = case_files();
        let result = resolve_accusation(&clues, &directory, "sr. black").unwrap();
        assert_eq!(result.tally, 0);
    }

    #[test]
    fn blank_submission_aborts_without_a_verdict() {
        let (clues, directory) = case_files();
        assert!(resolve_accusation(&clues, &directory, "").is_none());
        assert!(resolve_accusation(&clues, &directory, "   ").is_none());
        assert!(resolve_accusation(&clues, &directory, "\n").is_none());
    }

    #[test]
    fn trailing_newline_is_stripped_from_the_name() {
        let (clues, directory) = case_files();
        let result = resolve_accusation(&clues, &directory, "Sr. Black\r\n").unwrap();
        assert_eq!(result.accused, "Sr. Black");
        assert_eq!(result.verdict, Verdict::Guilty);
    }

    #[test]
    fn clues_without_facts_contribute_zero() {
        let (mut clues, directory) = case_files();
        clues.insert("Meia caída sob a cama");
        let result = resolve_accusation(&clues, &directory, "Sr. Black").unwrap();
        assert_eq!(result.tally, 2);
        // Evidence listing keeps ascending clue order and marks the miss.
        assert_eq!(result.evidence.len(), 4);
        let meia = result
            .evidence
            .iter()
            .find(|(clue, _)| clue == "Meia caída sob a cama")
            .unwrap();
        assert_eq!(meia.1, None);
    }
}
