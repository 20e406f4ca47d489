//! Roster import and validation
//!
//! Rosters reach the scheduler in one of two shapes:
//! - **Text**: one player name per line. Blank lines are skipped, names are
//!   trimmed, and every player starts out not eligible for first base.
//! - **JSON**: an array of `{"id", "name", "can_play_first"}` objects.
//!
//! The scheduler trusts its input; [`validate_roster`] is where duplicate ids
//! and blank names are caught.

use crate::models::player::{Player, PlayerId};
use crate::models::position::FIELD_SPOTS;
use crate::scheduler::bench_per_inning;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or checking a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate player id '{0}'")]
    DuplicateId(PlayerId),

    #[error("Player at position {index} has a blank name")]
    EmptyName { index: usize },

    #[error("No player named '{0}' on the roster")]
    UnknownPlayer(String),
}

/// Roster readiness, as shown before generating a lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterStatus {
    pub players: usize,
    /// Players sitting each inning
    pub subs_per_inning: usize,
    pub first_base_eligible: usize,
    /// Enough players to generate a schedule
    pub can_generate: bool,
}

/// Parse pasted text, one name per line.
///
/// # Example
/// ```
/// use lineup_core_rs::roster::parse_roster_text;
///
/// let roster = parse_roster_text("Alex\n\n  Bailey  \nCameron\n");
/// let names: Vec<&str> = roster.iter().map(|p| p.name()).collect();
/// assert_eq!(names, vec!["Alex", "Bailey", "Cameron"]);
/// ```
pub fn parse_roster_text(text: &str) -> Vec<Player> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Player::new)
        .collect()
}

/// Parse a JSON array of players.
pub fn parse_roster_json(json: &str) -> Result<Vec<Player>, RosterError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a roster file: JSON when the extension is `.json`, text otherwise.
pub fn load_roster(path: &Path) -> Result<Vec<Player>, RosterError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_roster_json(&contents)
    } else {
        Ok(parse_roster_text(&contents))
    }
}

/// Mark the named players as first-base eligible (case-insensitive).
///
/// Every name must match at least one player.
pub fn mark_first_base<S: AsRef<str>>(roster: &mut [Player], names: &[S]) -> Result<(), RosterError> {
    for name in names {
        let name = name.as_ref().trim();
        let mut matched = false;
        for player in roster.iter_mut() {
            if player.name().trim().eq_ignore_ascii_case(name) {
                player.set_can_play_first(true);
                matched = true;
            }
        }
        if !matched {
            return Err(RosterError::UnknownPlayer(name.to_string()));
        }
    }
    Ok(())
}

/// Reject duplicate ids and blank names.
pub fn validate_roster(roster: &[Player]) -> Result<(), RosterError> {
    let mut seen = HashSet::new();
    for (index, player) in roster.iter().enumerate() {
        if player.name().trim().is_empty() {
            return Err(RosterError::EmptyName { index });
        }
        if !seen.insert(player.id()) {
            return Err(RosterError::DuplicateId(player.id().clone()));
        }
    }
    Ok(())
}

/// Summarise whether a roster is ready for scheduling.
pub fn roster_status(roster: &[Player]) -> RosterStatus {
    RosterStatus {
        players: roster.len(),
        subs_per_inning: bench_per_inning(roster.len()),
        first_base_eligible: roster.iter().filter(|p| p.can_play_first()).count(),
        can_generate: roster.len() >= FIELD_SPOTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_import_assigns_unique_ids() {
        let roster = parse_roster_text("Alex\r\nBailey\n");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].name(), "Bailey");
        assert_ne!(roster[0].id(), roster[1].id());
        assert!(roster.iter().all(|p| !p.can_play_first()));
    }

    #[test]
    fn test_validate_catches_duplicate_ids() {
        let roster = vec![Player::with_id("1", "Alex"), Player::with_id("1", "Bailey")];
        assert!(matches!(validate_roster(&roster), Err(RosterError::DuplicateId(id)) if id.as_str() == "1"));
    }

    #[test]
    fn test_validate_catches_blank_names() {
        let roster = vec![Player::with_id("1", "Alex"), Player::with_id("2", "  ")];
        assert!(matches!(validate_roster(&roster), Err(RosterError::EmptyName { index: 1 })));
    }

    #[test]
    fn test_roster_status() {
        let mut roster = parse_roster_text("A\nB\nC\nD\nE\nF\nG\nH\nI\nJ\nK\nL\n");
        mark_first_base(&mut roster, &["b", "K"]).unwrap();

        let status = roster_status(&roster);
        assert_eq!(status.players, 12);
        assert_eq!(status.subs_per_inning, 2);
        assert_eq!(status.first_base_eligible, 2);
        assert!(status.can_generate);

        assert!(!roster_status(&roster[..9]).can_generate);
        assert_eq!(roster_status(&roster[..9]).subs_per_inning, 0);
    }
}
