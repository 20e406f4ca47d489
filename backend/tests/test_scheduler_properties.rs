//! Property tests for the scheduler
//!
//! Random roster sizes and first-base flags; every generated schedule must
//! satisfy the fairness invariants.

use lineup_core_rs::{build_summary, generate_schedule, Assignment, Player, Position, RngManager, Schedule, INNINGS};
use proptest::prelude::*;

fn roster_from_flags(flags: &[bool]) -> Vec<Player> {
    flags
        .iter()
        .enumerate()
        .map(|(i, eligible)| Player::with_id(format!("p{}", i), format!("Player {}", i)).with_first_base(*eligible))
        .collect()
}

fn bench_counts(roster: &[Player], schedule: &Schedule) -> Vec<u32> {
    let summary = build_summary(roster, schedule);
    summary.players().iter().map(|p| p.bench).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_each_inning_fills_every_position(flags in prop::collection::vec(any::<bool>(), 10..=20)) {
        let roster = roster_from_flags(&flags);
        let schedule = generate_schedule(&roster).unwrap();

        prop_assert_eq!(schedule.innings().len(), INNINGS);
        for inning in schedule.innings() {
            prop_assert_eq!(inning.bench().len(), roster.len() - 10);
            for position in Position::ALL {
                prop_assert!(inning.player_at(position).is_some());
            }
            let fielding = inning.assignments().iter().filter(|a| !a.assignment.is_bench()).count();
            prop_assert_eq!(fielding, 10);
        }
    }

    #[test]
    fn prop_no_consecutive_bench(flags in prop::collection::vec(any::<bool>(), 11..=20)) {
        let roster = roster_from_flags(&flags);
        let schedule = generate_schedule(&roster).unwrap();

        for pair in schedule.innings().windows(2) {
            for entry in pair[1].assignments() {
                if entry.assignment.is_bench() {
                    prop_assert_ne!(pair[0].get(&entry.player_id), Some(Assignment::Bench));
                }
            }
        }
        prop_assert!(schedule.diagnostics().of_type("ConsecutiveBench").is_empty());
    }

    #[test]
    fn prop_first_base_goes_to_eligible_fielder(flags in prop::collection::vec(any::<bool>(), 10..=20)) {
        let roster = roster_from_flags(&flags);
        let schedule = generate_schedule(&roster).unwrap();

        for inning in schedule.innings() {
            let eligible_fielding = roster.iter().any(|p| {
                p.can_play_first() && inning.get(p.id()).is_some_and(|a| !a.is_bench())
            });
            let holder = inning.player_at(Position::FirstBase).unwrap();
            let holder_eligible = roster.iter().any(|p| p.id() == holder && p.can_play_first());

            if eligible_fielding {
                prop_assert!(holder_eligible, "inning {}: 1B given to ineligible player", inning.inning());
            }
        }
    }

    #[test]
    fn prop_summary_accounts_for_every_inning(flags in prop::collection::vec(any::<bool>(), 10..=20)) {
        let roster = roster_from_flags(&flags);
        let schedule = generate_schedule(&roster).unwrap();
        let summary = build_summary(&roster, &schedule);

        prop_assert_eq!(summary.players().len(), roster.len());
        for player in summary.players() {
            let at_positions: u32 = player.positions.values().sum();
            prop_assert_eq!(at_positions, player.played);
            prop_assert_eq!(player.played + player.bench, INNINGS as u32);
        }
    }

    #[test]
    fn prop_deterministic(flags in prop::collection::vec(any::<bool>(), 10..=20)) {
        let roster = roster_from_flags(&flags);
        let first = generate_schedule(&roster).unwrap();
        let second = generate_schedule(&roster).unwrap();
        prop_assert_eq!(first, second);
    }
}

/// Bench totals stay within one inning of each other for typical team sizes.
#[test]
fn test_bench_fairness_simulation() {
    let mut rng = RngManager::new(20240601);

    for size in 10..=16 {
        for _ in 0..200 {
            let flags: Vec<bool> = (0..size).map(|_| rng.below(2) == 1).collect();
            let roster = roster_from_flags(&flags);
            let schedule = generate_schedule(&roster).unwrap();

            let counts = bench_counts(&roster, &schedule);
            let max = counts.iter().max().copied().unwrap_or(0);
            let min = counts.iter().min().copied().unwrap_or(0);
            assert!(max - min <= 1, "size {}: bench counts {:?}", size, counts);
        }
    }
}

/// Total bench innings always equal seats × innings.
#[test]
fn test_bench_total_matches_seats() {
    for size in 10..=20 {
        let roster = roster_from_flags(&vec![false; size]);
        let schedule = generate_schedule(&roster).unwrap();

        let total: u32 = bench_counts(&roster, &schedule).iter().sum();
        assert_eq!(total as usize, (size - 10) * INNINGS);
    }
}
