//! Sitter selection
//!
//! Players who sat last inning are never picked while enough other
//! candidates remain. Among candidates, fewest bench innings sits first,
//! then lowest roster index.

use crate::scheduler::tracking::TrackingState;

/// Result of choosing an inning's sitters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitterSelection {
    /// Roster indices sitting this inning, ascending
    pub sitters: Vec<usize>,
    /// Subset of `sitters` who also sat last inning
    pub repeats: Vec<usize>,
}

/// Choose `count` sitters for the coming inning.
///
/// When fewer than `count` players are rested (only possible once more than
/// half the roster sits each inning), the remaining seats go to last inning's
/// sitters in the same ranking and are reported in `repeats`.
pub fn choose_sitters(state: &TrackingState, count: usize) -> SitterSelection {
    if count == 0 {
        return SitterSelection::default();
    }

    let rank = |a: &usize, b: &usize| {
        state
            .player(*a)
            .bench_count()
            .cmp(&state.player(*b).bench_count())
            .then(a.cmp(b))
    };

    let (mut rested, mut tired): (Vec<usize>, Vec<usize>) =
        (0..state.len()).partition(|&i| !state.player(i).benched_last());
    rested.sort_by(rank);
    tired.sort_by(rank);

    let mut sitters: Vec<usize> = rested.into_iter().take(count).collect();
    let repeats: Vec<usize> = tired.into_iter().take(count - sitters.len()).collect();
    sitters.extend(&repeats);
    sitters.sort_unstable();

    SitterSelection { sitters, repeats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::{Assignment, Position};

    fn fielding() -> Assignment {
        Assignment::Field(Position::Pitcher)
    }

    #[test]
    fn test_zero_seats() {
        let state = TrackingState::new(10);
        assert_eq!(choose_sitters(&state, 0), SitterSelection::default());
    }

    #[test]
    fn test_first_inning_takes_lowest_indices() {
        let state = TrackingState::new(13);
        let selection = choose_sitters(&state, 3);
        assert_eq!(selection.sitters, vec![0, 1, 2]);
        assert!(selection.repeats.is_empty());
    }

    #[test]
    fn test_skips_last_inning_sitters() {
        let mut state = TrackingState::new(5);
        state.record_inning(&[Assignment::Bench, Assignment::Bench, fielding(), fielding(), fielding()]);

        let selection = choose_sitters(&state, 2);
        assert_eq!(selection.sitters, vec![2, 3]);
    }

    #[test]
    fn test_prefers_fewest_bench_innings() {
        let mut state = TrackingState::new(4);
        state.record_inning(&[Assignment::Bench, fielding(), fielding(), fielding()]);
        state.record_inning(&[fielding(), Assignment::Bench, fielding(), fielding()]);

        // 0 and 1 have each sat once; 1 sat last inning
        let selection = choose_sitters(&state, 2);
        assert_eq!(selection.sitters, vec![2, 3]);
    }

    #[test]
    fn test_repeats_when_too_few_rested() {
        let mut state = TrackingState::new(5);
        state.record_inning(&[
            Assignment::Bench,
            Assignment::Bench,
            Assignment::Bench,
            fielding(),
            fielding(),
        ]);

        let selection = choose_sitters(&state, 3);
        assert_eq!(selection.sitters, vec![0, 3, 4]);
        assert_eq!(selection.repeats, vec![0]);
    }
}
