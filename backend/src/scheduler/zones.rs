//! Zone balancing
//!
//! Splits an inning's ten fielders into six infielders and four outfielders,
//! steering everyone toward the zone they did not play last inning:
//!
//! ```text
//! last inning        prefers
//! -----------        -------
//! infield         -> outfield
//! outfield        -> infield
//! bench / none    -> infield
//! ```
//!
//! Within a preference pool the players with the least time already spent in
//! the target zone are chosen, ties by roster index.

use crate::models::player::Player;
use crate::models::position::{Position, Zone};
use crate::scheduler::tracking::TrackingState;

/// Fielders split by zone, each list in roster order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSplit {
    pub infield: Vec<usize>,
    pub outfield: Vec<usize>,
    /// Set when neither preference pool could fill its zone
    pub preference_ignored: bool,
    /// Pool sizes seen while splitting (prefer infield, prefer outfield)
    pub pools: (usize, usize),
}

impl ZoneSplit {
    /// Players assigned to a zone
    pub fn players(&self, zone: Zone) -> &[usize] {
        match zone {
            Zone::Infield => &self.infield,
            Zone::Outfield => &self.outfield,
        }
    }
}

/// Pick `count` players from `pool` with the least time in `zone`.
fn least_zone_time(pool: &[usize], count: usize, zone: Zone, state: &TrackingState) -> Vec<usize> {
    let mut ranked = pool.to_vec();
    ranked.sort_by_key(|&i| (state.player(i).zone_time(zone), i));
    ranked.truncate(count);
    ranked
}

/// Everyone in `fielders` not in `chosen`, roster order
fn rest(fielders: &[usize], chosen: &[usize]) -> Vec<usize> {
    fielders
        .iter()
        .copied()
        .filter(|i| !chosen.contains(i))
        .collect()
}

/// Split `fielders` (roster indices, ascending) into zones.
pub fn balance_zones(fielders: &[usize], state: &TrackingState) -> ZoneSplit {
    let infield_size = Zone::Infield.size();
    let outfield_size = Zone::Outfield.size();

    let (prefer_infield, prefer_outfield): (Vec<usize>, Vec<usize>) = fielders
        .iter()
        .copied()
        .partition(|&i| state.player(i).last_zone() != Some(Zone::Infield));

    let infield_ok = prefer_infield.len() >= infield_size;
    let outfield_ok = prefer_outfield.len() >= outfield_size;

    let (mut infield, mut outfield) = match (infield_ok, outfield_ok) {
        (true, true) => (
            least_zone_time(&prefer_infield, infield_size, Zone::Infield, state),
            least_zone_time(&prefer_outfield, outfield_size, Zone::Outfield, state),
        ),
        (true, false) => {
            let infield = least_zone_time(&prefer_infield, infield_size, Zone::Infield, state);
            let outfield = rest(fielders, &infield);
            (infield, outfield)
        }
        (false, true) => {
            let outfield = least_zone_time(&prefer_outfield, outfield_size, Zone::Outfield, state);
            let infield = rest(fielders, &outfield);
            (infield, outfield)
        }
        (false, false) => {
            let infield = least_zone_time(fielders, infield_size, Zone::Infield, state);
            let outfield = rest(fielders, &infield);
            (infield, outfield)
        }
    };
    infield.sort_unstable();
    outfield.sort_unstable();

    ZoneSplit {
        infield,
        outfield,
        preference_ignored: !infield_ok && !outfield_ok,
        pools: (prefer_infield.len(), prefer_outfield.len()),
    }
}

/// Make sure first base can go to an eligible player.
///
/// If the infield has no eligible player but the outfield does, the eligible
/// outfielder with the fewest 1B innings trades places with one infielder:
/// someone who did not play outfield last inning if possible, then least
/// outfield time, then lowest roster index. Returns `(to_infield,
/// to_outfield)` when a swap happened.
pub fn cover_first_base(
    split: &mut ZoneSplit,
    roster: &[Player],
    state: &TrackingState,
) -> Option<(usize, usize)> {
    let eligible = |i: &usize| roster[*i].can_play_first();

    if split.infield.iter().any(eligible) {
        return None;
    }

    let incoming = split
        .outfield
        .iter()
        .copied()
        .filter(eligible)
        .min_by_key(|&i| (state.player(i).count_at(Position::FirstBase), i))?;

    let outgoing = split.infield.iter().copied().min_by_key(|&i| {
        let tracking = state.player(i);
        (
            tracking.last_zone() == Some(Zone::Outfield),
            tracking.zone_time(Zone::Outfield),
            i,
        )
    })?;

    split.infield.retain(|&i| i != outgoing);
    split.infield.push(incoming);
    split.infield.sort_unstable();

    split.outfield.retain(|&i| i != incoming);
    split.outfield.push(outgoing);
    split.outfield.sort_unstable();

    Some((incoming, outgoing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::Assignment;

    fn roster(eligible: &[usize], size: usize) -> Vec<Player> {
        (0..size)
            .map(|i| Player::with_id(i.to_string(), format!("P{}", i)).with_first_base(eligible.contains(&i)))
            .collect()
    }

    fn card(positions: &[Position]) -> Vec<Assignment> {
        positions.iter().map(|p| Assignment::Field(*p)).collect()
    }

    #[test]
    fn test_first_inning_fills_infield_from_lowest_indices() {
        let state = TrackingState::new(10);
        let fielders: Vec<usize> = (0..10).collect();

        let split = balance_zones(&fielders, &state);
        assert_eq!(split.infield, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(split.outfield, vec![6, 7, 8, 9]);
        assert!(!split.preference_ignored);
        assert_eq!(split.pools, (10, 0));
    }

    #[test]
    fn test_zones_alternate_after_full_inning() {
        let mut state = TrackingState::new(10);
        state.record_inning(&card(&Position::ALL));
        let fielders: Vec<usize> = (0..10).collect();

        let split = balance_zones(&fielders, &state);
        // Outfielders cannot fill six infield spots, so the infield is
        // completed from the remaining players.
        assert_eq!(split.outfield, vec![0, 1, 2, 3]);
        assert_eq!(split.infield, vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_cover_first_base_swaps_eligible_outfielder_in() {
        let players = roster(&[8], 10);
        let state = TrackingState::new(10);
        let mut split = ZoneSplit {
            infield: vec![0, 1, 2, 3, 4, 5],
            outfield: vec![6, 7, 8, 9],
            preference_ignored: false,
            pools: (10, 0),
        };

        let swap = cover_first_base(&mut split, &players, &state);
        assert_eq!(swap, Some((8, 0)));
        assert_eq!(split.infield, vec![1, 2, 3, 4, 5, 8]);
        assert_eq!(split.outfield, vec![0, 6, 7, 9]);
    }

    #[test]
    fn test_cover_first_base_noop_when_covered_or_impossible() {
        let state = TrackingState::new(10);
        let base = ZoneSplit {
            infield: vec![0, 1, 2, 3, 4, 5],
            outfield: vec![6, 7, 8, 9],
            preference_ignored: false,
            pools: (10, 0),
        };

        let mut covered = base.clone();
        assert_eq!(cover_first_base(&mut covered, &roster(&[2, 7], 10), &state), None);
        assert_eq!(covered, base);

        let mut nobody = base.clone();
        assert_eq!(cover_first_base(&mut nobody, &roster(&[], 10), &state), None);
        assert_eq!(nobody, base);
    }
}
