//! Scheduler engine
//!
//! Builds a six-inning lineup from a roster. Each inning runs the same four
//! steps against a tracking state that carries over from the previous one:
//!
//! ```text
//! For each inning:
//! 1. Choose sitters (never the same player twice in a row if avoidable)
//! 2. Split fielders into infield / outfield (alternate zones)
//! 3. Assign positions within each zone (1B to eligible players first)
//! 4. Record the inning in the tracking state
//! ```
//!
//! The engine is deterministic: every tie is broken on roster index, so the
//! same roster (same order, same attributes) always yields the same schedule.
//!
//! # Example
//!
//! ```rust
//! use lineup_core_rs::{generate_schedule, Player};
//!
//! let roster: Vec<Player> = (1..=12)
//!     .map(|i| Player::with_id(i.to_string(), format!("Player {}", i)).with_first_base(i % 4 == 0))
//!     .collect();
//!
//! let schedule = generate_schedule(&roster).unwrap();
//! assert_eq!(schedule.innings().len(), 6);
//! for inning in schedule.innings() {
//!     assert_eq!(inning.bench().len(), 2);
//! }
//! ```

use crate::models::diagnostic::{Diagnostic, DiagnosticLog};
use crate::models::player::Player;
use crate::models::position::{Assignment, Position, Zone, FIELD_SPOTS, INNINGS};
use crate::models::schedule::{InningAssignment, PlayerAssignment, Schedule};
use crate::scheduler::positions::assign_zone;
use crate::scheduler::sitters::choose_sitters;
use crate::scheduler::tracking::TrackingState;
use crate::scheduler::zones::{balance_zones, cover_first_base};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while generating a schedule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Need at least {required} players to field a team (got {actual})")]
    RosterTooSmall { required: usize, actual: usize },
}

/// Players sitting each inning for a roster of `roster_size`
///
/// Zero for rosters smaller than a full field.
pub fn bench_per_inning(roster_size: usize) -> usize {
    roster_size.saturating_sub(FIELD_SPOTS)
}

/// Generate a full six-inning schedule for `roster`.
///
/// # Errors
/// Returns [`ScheduleError::RosterTooSmall`] when the roster has fewer than
/// ten players.
pub fn generate_schedule(roster: &[Player]) -> Result<Schedule, ScheduleError> {
    if roster.len() < FIELD_SPOTS {
        return Err(ScheduleError::RosterTooSmall {
            required: FIELD_SPOTS,
            actual: roster.len(),
        });
    }

    let mut planner = InningPlanner::new(roster);
    let innings: Vec<InningAssignment> = (1..=INNINGS).map(|inning| planner.plan_inning(inning)).collect();

    debug!(
        players = roster.len(),
        diagnostics = planner.diagnostics.len(),
        "schedule generated"
    );

    Ok(Schedule::new(innings, planner.diagnostics))
}

/// Owns the tracking state for one generation run
struct InningPlanner<'a> {
    roster: &'a [Player],
    state: TrackingState,
    diagnostics: DiagnosticLog,
}

impl<'a> InningPlanner<'a> {
    fn new(roster: &'a [Player]) -> Self {
        Self {
            roster,
            state: TrackingState::new(roster.len()),
            diagnostics: DiagnosticLog::new(),
        }
    }

    fn plan_inning(&mut self, inning: usize) -> InningAssignment {
        let mut card = vec![Assignment::Bench; self.roster.len()];

        // Step 1: sitters
        let selection = choose_sitters(&self.state, bench_per_inning(self.roster.len()));
        for &i in &selection.repeats {
            warn!(
                inning,
                player = %self.roster[i].id(),
                "not enough rested players, benching consecutively"
            );
            self.diagnostics.log(Diagnostic::ConsecutiveBench {
                inning,
                player_id: self.roster[i].id().clone(),
            });
        }

        // Step 2: zones
        let fielders: Vec<usize> = (0..self.roster.len())
            .filter(|i| selection.sitters.binary_search(i).is_err())
            .collect();
        let mut split = balance_zones(&fielders, &self.state);
        if split.preference_ignored {
            debug!(
                inning,
                prefer_infield = split.pools.0,
                prefer_outfield = split.pools.1,
                "zone preferences could not be honoured"
            );
            self.diagnostics.log(Diagnostic::ZonePreferenceIgnored {
                inning,
                prefer_infield: split.pools.0,
                prefer_outfield: split.pools.1,
            });
        }
        if let Some((to_infield, to_outfield)) = cover_first_base(&mut split, self.roster, &self.state) {
            debug!(
                inning,
                to_infield = %self.roster[to_infield].id(),
                to_outfield = %self.roster[to_outfield].id(),
                "swapped zones to cover first base"
            );
            self.diagnostics.log(Diagnostic::FirstBaseSwap {
                inning,
                to_infield: self.roster[to_infield].id().clone(),
                to_outfield: self.roster[to_outfield].id().clone(),
            });
        }

        // Step 3: positions
        for zone in [Zone::Infield, Zone::Outfield] {
            for (i, position) in assign_zone(zone, split.players(zone), self.roster, &self.state) {
                card[i] = Assignment::Field(position);
            }
        }
        self.check_first_base(inning, &card);
        self.check_zone_repeats(inning, &card);

        debug!(
            inning,
            sitters = selection.sitters.len(),
            infield = split.infield.len(),
            outfield = split.outfield.len(),
            "inning planned"
        );

        // Step 4: tracking
        self.state.record_inning(&card);

        InningAssignment::new(
            inning,
            self.roster
                .iter()
                .zip(card)
                .map(|(player, assignment)| PlayerAssignment {
                    player_id: player.id().clone(),
                    assignment,
                })
                .collect(),
        )
    }

    fn check_first_base(&mut self, inning: usize, card: &[Assignment]) {
        let holder = card
            .iter()
            .position(|a| *a == Assignment::Field(Position::FirstBase));

        if let Some(i) = holder.filter(|&i| !self.roster[i].can_play_first()) {
            warn!(
                inning,
                player = %self.roster[i].id(),
                "no eligible fielder, first base assigned without restriction"
            );
            self.diagnostics.log(Diagnostic::FirstBaseUnrestricted {
                inning,
                player_id: self.roster[i].id().clone(),
            });
        }
    }

    fn check_zone_repeats(&mut self, inning: usize, card: &[Assignment]) {
        for (i, assignment) in card.iter().enumerate() {
            let Some(zone) = assignment.zone() else {
                continue;
            };
            if self.state.player(i).last_zone() == Some(zone) {
                debug!(inning, player = %self.roster[i].id(), %zone, "zone repeated");
                self.diagnostics.log(Diagnostic::ZoneRepeated {
                    inning,
                    player_id: self.roster[i].id().clone(),
                    zone,
                });
            }
        }
    }
}
