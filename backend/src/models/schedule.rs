//! Schedule model
//!
//! A [`Schedule`] is the scheduler's output: one [`InningAssignment`] per
//! inning plus the diagnostics raised while building it. Assignments are kept
//! in roster order so consumers can render rows without re-sorting.
//!
//! # Critical Invariants
//!
//! - Exactly six innings, numbered 1..=6
//! - Every inning has one entry per roster player
//! - Every field position appears exactly once per inning

use crate::models::diagnostic::DiagnosticLog;
use crate::models::player::PlayerId;
use crate::models::position::{Assignment, Position, Zone};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur while fingerprinting a schedule
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Schedule serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One player's slot in one inning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAssignment {
    pub player_id: PlayerId,
    pub assignment: Assignment,
}

/// Assignments for a single inning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningAssignment {
    /// 1-based inning number
    inning: usize,
    /// One entry per roster player, roster order
    assignments: Vec<PlayerAssignment>,
}

impl InningAssignment {
    pub fn new(inning: usize, assignments: Vec<PlayerAssignment>) -> Self {
        Self {
            inning,
            assignments,
        }
    }

    pub fn inning(&self) -> usize {
        self.inning
    }

    pub fn assignments(&self) -> &[PlayerAssignment] {
        &self.assignments
    }

    /// Assignment for a player, if they are on this inning's card
    pub fn get(&self, player_id: &PlayerId) -> Option<Assignment> {
        self.assignments
            .iter()
            .find(|a| &a.player_id == player_id)
            .map(|a| a.assignment)
    }

    /// Player fielding a position
    pub fn player_at(&self, position: Position) -> Option<&PlayerId> {
        self.assignments
            .iter()
            .find(|a| a.assignment == Assignment::Field(position))
            .map(|a| &a.player_id)
    }

    /// Players on the bench, roster order
    pub fn bench(&self) -> Vec<&PlayerId> {
        self.assignments
            .iter()
            .filter(|a| a.assignment.is_bench())
            .map(|a| &a.player_id)
            .collect()
    }

    /// Players fielding in a zone, roster order
    pub fn in_zone(&self, zone: Zone) -> Vec<&PlayerId> {
        self.assignments
            .iter()
            .filter(|a| a.assignment.zone() == Some(zone))
            .map(|a| &a.player_id)
            .collect()
    }
}

/// A full game's lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    innings: Vec<InningAssignment>,
    #[serde(default)]
    diagnostics: DiagnosticLog,
}

impl Schedule {
    pub fn new(innings: Vec<InningAssignment>, diagnostics: DiagnosticLog) -> Self {
        Self {
            innings,
            diagnostics,
        }
    }

    pub fn innings(&self) -> &[InningAssignment] {
        &self.innings
    }

    /// Inning by 1-based number
    pub fn inning(&self, number: usize) -> Option<&InningAssignment> {
        self.innings.iter().find(|i| i.inning() == number)
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// A player's assignment in every inning, in order
    pub fn player_line(&self, player_id: &PlayerId) -> Vec<Option<Assignment>> {
        self.innings.iter().map(|i| i.get(player_id)).collect()
    }

    /// SHA-256 over the canonical JSON of the innings (diagnostics excluded)
    ///
    /// Two schedules with the same fingerprint assign every player identically.
    pub fn fingerprint(&self) -> Result<String, FingerprintError> {
        let json = serde_json::to_string(&self.innings)?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inning_with(entries: &[(&str, Assignment)]) -> InningAssignment {
        InningAssignment::new(
            1,
            entries
                .iter()
                .map(|(id, assignment)| PlayerAssignment {
                    player_id: PlayerId::new(*id),
                    assignment: *assignment,
                })
                .collect(),
        )
    }

    #[test]
    fn test_inning_queries() {
        let inning = inning_with(&[
            ("a", Assignment::Field(Position::Pitcher)),
            ("b", Assignment::Bench),
            ("c", Assignment::Field(Position::LeftField)),
        ]);

        assert_eq!(inning.get(&PlayerId::new("b")), Some(Assignment::Bench));
        assert_eq!(inning.get(&PlayerId::new("z")), None);
        assert_eq!(inning.player_at(Position::Pitcher), Some(&PlayerId::new("a")));
        assert_eq!(inning.player_at(Position::Catcher), None);
        assert_eq!(inning.bench(), vec![&PlayerId::new("b")]);
        assert_eq!(inning.in_zone(Zone::Outfield), vec![&PlayerId::new("c")]);
    }

    #[test]
    fn test_inning_serializes_labels() {
        let inning = inning_with(&[("a", Assignment::Field(Position::FirstBase))]);
        let json = serde_json::to_value(&inning).unwrap();
        assert_eq!(json["inning"], 1);
        assert_eq!(json["assignments"][0]["assignment"], "1B");
    }
}
