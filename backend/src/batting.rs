//! Batting order
//!
//! A batting order is a uniformly random permutation of the roster,
//! independent of the field schedule.

use crate::models::player::Player;
use crate::rng::RngManager;

/// Random batting order using a freshly seeded RNG.
pub fn generate_batting_order(roster: &[Player]) -> Vec<Player> {
    generate_batting_order_with(roster, &mut RngManager::from_entropy())
}

/// Random batting order drawn from `rng`.
///
/// Same RNG state, same order.
///
/// # Example
/// ```
/// use lineup_core_rs::{generate_batting_order_with, Player, RngManager};
///
/// let roster: Vec<Player> = ["Alex", "Bailey", "Cameron"]
///     .iter()
///     .enumerate()
///     .map(|(i, name)| Player::with_id(i.to_string(), *name))
///     .collect();
///
/// let first = generate_batting_order_with(&roster, &mut RngManager::new(3));
/// let again = generate_batting_order_with(&roster, &mut RngManager::new(3));
/// assert_eq!(first, again);
/// assert_eq!(first.len(), 3);
/// ```
pub fn generate_batting_order_with(roster: &[Player], rng: &mut RngManager) -> Vec<Player> {
    let mut order = roster.to_vec();
    rng.shuffle(&mut order);
    order
}
