//! Per-run tracking state
//!
//! Everything the fairness heuristics look at: how often each player has
//! played each position, how often they have sat, and where they were last
//! inning. Players are addressed by roster index, which is also the
//! tie-breaker everywhere in the scheduler.
//!
//! One `TrackingState` belongs to exactly one `generate_schedule` call.

use crate::models::position::{Assignment, Position, Zone, FIELD_SPOTS};

/// Where a player was during the previous inning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastSlot {
    Field(Zone),
    Bench,
}

/// Running totals for one player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTracking {
    position_counts: [u32; FIELD_SPOTS],
    bench_count: u32,
    last: Option<LastSlot>,
}

impl PlayerTracking {
    /// Innings played at a position
    pub fn count_at(&self, position: Position) -> u32 {
        self.position_counts[position.index()]
    }

    /// Innings played anywhere in a zone
    pub fn zone_time(&self, zone: Zone) -> u32 {
        zone.positions().iter().map(|p| self.count_at(*p)).sum()
    }

    pub fn bench_count(&self) -> u32 {
        self.bench_count
    }

    /// Slot occupied last inning (`None` before the first inning)
    pub fn last(&self) -> Option<LastSlot> {
        self.last
    }

    pub fn benched_last(&self) -> bool {
        self.last == Some(LastSlot::Bench)
    }

    /// Zone fielded last inning, if the player was fielding
    pub fn last_zone(&self) -> Option<Zone> {
        match self.last {
            Some(LastSlot::Field(zone)) => Some(zone),
            _ => None,
        }
    }

    fn record(&mut self, assignment: Assignment) {
        match assignment {
            Assignment::Field(position) => {
                self.position_counts[position.index()] += 1;
                self.last = Some(LastSlot::Field(position.zone()));
            }
            Assignment::Bench => {
                self.bench_count += 1;
                self.last = Some(LastSlot::Bench);
            }
        }
    }
}

/// Tracking for a whole roster, indexed by roster position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingState {
    players: Vec<PlayerTracking>,
}

impl TrackingState {
    /// Fresh state for a roster of `roster_size` players
    pub fn new(roster_size: usize) -> Self {
        Self {
            players: vec![PlayerTracking::default(); roster_size],
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Tracking for the player at `index`
    ///
    /// # Panics
    /// Panics if `index` is outside the roster.
    pub fn player(&self, index: usize) -> &PlayerTracking {
        &self.players[index]
    }

    /// Record one inning. `assignments[i]` belongs to roster index `i`.
    pub fn record_inning(&mut self, assignments: &[Assignment]) {
        assert_eq!(
            assignments.len(),
            self.players.len(),
            "inning must assign every rostered player"
        );
        for (tracking, assignment) in self.players.iter_mut().zip(assignments) {
            tracking.record(*assignment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_no_history() {
        let state = TrackingState::new(3);
        assert_eq!(state.len(), 3);
        for i in 0..3 {
            let player = state.player(i);
            assert_eq!(player.bench_count(), 0);
            assert_eq!(player.last(), None);
            assert!(!player.benched_last());
            assert_eq!(player.zone_time(Zone::Infield), 0);
        }
    }

    #[test]
    fn test_record_inning_updates_counts_and_last_slot() {
        let mut state = TrackingState::new(2);
        state.record_inning(&[Assignment::Field(Position::FirstBase), Assignment::Bench]);
        state.record_inning(&[Assignment::Field(Position::FirstBase), Assignment::Field(Position::RightField)]);

        let first = state.player(0);
        assert_eq!(first.count_at(Position::FirstBase), 2);
        assert_eq!(first.zone_time(Zone::Infield), 2);
        assert_eq!(first.last_zone(), Some(Zone::Infield));

        let second = state.player(1);
        assert_eq!(second.bench_count(), 1);
        assert!(!second.benched_last());
        assert_eq!(second.last_zone(), Some(Zone::Outfield));
        assert_eq!(second.zone_time(Zone::Outfield), 1);
    }

    #[test]
    #[should_panic(expected = "inning must assign every rostered player")]
    fn test_record_inning_rejects_short_card() {
        let mut state = TrackingState::new(2);
        state.record_inning(&[Assignment::Bench]);
    }
}
