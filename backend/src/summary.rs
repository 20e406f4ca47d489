//! Per-player season summary
//!
//! Aggregates a finished [`Schedule`] into innings played, innings benched and
//! innings at each position. Every rostered player appears, with all ten
//! positions present even when never played.

use crate::models::player::{Player, PlayerId};
use crate::models::position::{Assignment, Position};
use crate::models::schedule::Schedule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub name: String,
    /// Innings fielding
    pub played: u32,
    /// Innings on the bench
    pub bench: u32,
    /// Innings at each position (all positions present)
    pub positions: BTreeMap<Position, u32>,
}

impl PlayerSummary {
    fn new(player: &Player) -> Self {
        Self {
            player_id: player.id().clone(),
            name: player.name().to_string(),
            played: 0,
            bench: 0,
            positions: Position::ALL.into_iter().map(|p| (p, 0)).collect(),
        }
    }

    /// Innings at `position`
    pub fn count_at(&self, position: Position) -> u32 {
        self.positions.get(&position).copied().unwrap_or(0)
    }

    /// Innings accounted for (played + bench)
    pub fn total(&self) -> u32 {
        self.played + self.bench
    }
}

/// Summary for a whole roster, in roster order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary {
    players: Vec<PlayerSummary>,
}

impl Summary {
    pub fn players(&self) -> &[PlayerSummary] {
        &self.players
    }

    /// Totals for one player
    pub fn get(&self, player_id: &PlayerId) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| &p.player_id == player_id)
    }
}

/// Build the per-player summary of `schedule`.
///
/// Assignments for ids not on `roster` are ignored.
pub fn build_summary(roster: &[Player], schedule: &Schedule) -> Summary {
    let mut players: Vec<PlayerSummary> = roster.iter().map(PlayerSummary::new).collect();

    for inning in schedule.innings() {
        for entry in inning.assignments() {
            let Some(summary) = players.iter_mut().find(|p| p.player_id == entry.player_id) else {
                continue;
            };
            match entry.assignment {
                Assignment::Bench => summary.bench += 1,
                Assignment::Field(position) => {
                    summary.played += 1;
                    *summary.positions.entry(position).or_insert(0) += 1;
                }
            }
        }
    }

    Summary { players }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::diagnostic::DiagnosticLog;
    use crate::models::schedule::{InningAssignment, PlayerAssignment};

    #[test]
    fn test_counts_bench_and_positions() {
        let roster = vec![Player::with_id("a", "Alex"), Player::with_id("b", "Bailey")];
        let innings = vec![
            InningAssignment::new(
                1,
                vec![
                    PlayerAssignment {
                        player_id: "a".into(),
                        assignment: Assignment::Field(Position::Catcher),
                    },
                    PlayerAssignment {
                        player_id: "b".into(),
                        assignment: Assignment::Bench,
                    },
                ],
            ),
            InningAssignment::new(
                2,
                vec![
                    PlayerAssignment {
                        player_id: "a".into(),
                        assignment: Assignment::Field(Position::Catcher),
                    },
                    PlayerAssignment {
                        player_id: "ghost".into(),
                        assignment: Assignment::Bench,
                    },
                ],
            ),
        ];
        let summary = build_summary(&roster, &Schedule::new(innings, DiagnosticLog::new()));

        let alex = summary.get(&"a".into()).unwrap();
        assert_eq!(alex.played, 2);
        assert_eq!(alex.bench, 0);
        assert_eq!(alex.count_at(Position::Catcher), 2);
        assert_eq!(alex.count_at(Position::Pitcher), 0);
        assert_eq!(alex.positions.len(), 10);

        let bailey = summary.get(&"b".into()).unwrap();
        assert_eq!(bailey.total(), 1);
        assert!(summary.get(&"ghost".into()).is_none());
    }

    #[test]
    fn test_positions_serialize_as_labels() {
        let summary = build_summary(&[Player::with_id("a", "Alex")], &Schedule::new(vec![], DiagnosticLog::new()));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json[0]["positions"]["1B"], 0);
        assert_eq!(json[0]["name"], "Alex");
    }
}
