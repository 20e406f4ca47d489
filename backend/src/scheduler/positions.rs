//! Position assignment within a zone
//!
//! Greedy, rarest-position-first:
//! 1. Infield only: the eligible player with the fewest 1B innings takes 1B.
//!    With nobody eligible, 1B joins the open positions below.
//! 2. Open positions are ranked by how often the zone's remaining players
//!    have played them (fewest first, ties canonical order).
//! 3. Each position in turn goes to the unassigned player with the fewest
//!    innings there, ties by roster index.

use crate::models::player::Player;
use crate::models::position::{Position, Zone};
use crate::scheduler::tracking::TrackingState;

/// Assign every position in `zone` to one of `players` (roster indices).
///
/// Returns `(roster index, position)` pairs in assignment order.
pub fn assign_zone(
    zone: Zone,
    players: &[usize],
    roster: &[Player],
    state: &TrackingState,
) -> Vec<(usize, Position)> {
    debug_assert_eq!(players.len(), zone.size());

    let mut remaining: Vec<usize> = players.to_vec();
    let mut open: Vec<Position> = zone.positions().to_vec();
    let mut assigned = Vec::with_capacity(open.len());

    if open.contains(&Position::FirstBase) {
        let first_base = remaining
            .iter()
            .copied()
            .filter(|&i| roster[i].can_play_first())
            .min_by_key(|&i| (state.player(i).count_at(Position::FirstBase), i));

        if let Some(picked) = first_base {
            assigned.push((picked, Position::FirstBase));
            remaining.retain(|&i| i != picked);
            open.retain(|&p| p != Position::FirstBase);
        }
    }

    open.sort_by_key(|&position| {
        let played: u32 = remaining
            .iter()
            .map(|&i| state.player(i).count_at(position))
            .sum();
        (played, position)
    });

    for position in open {
        let Some(picked) = remaining
            .iter()
            .copied()
            .min_by_key(|&i| (state.player(i).count_at(position), i))
        else {
            break;
        };
        assigned.push((picked, position));
        remaining.retain(|&i| i != picked);
    }

    assigned
}
