//! Player model
//!
//! A player is identified by a stable string id. The id (not the name) is
//! what schedules and summaries are keyed on, so two players may share a
//! display name.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable player identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A rostered player
///
/// # Example
/// ```
/// use lineup_core_rs::Player;
///
/// let player = Player::with_id("7", "Gray").with_first_base(true);
/// assert_eq!(player.id().as_str(), "7");
/// assert!(player.can_play_first());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Whether the player may be assigned first base
    #[serde(default)]
    can_play_first: bool,
}

impl Player {
    /// Create a player with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::generate(), name)
    }

    /// Create a player with a caller-supplied id
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            can_play_first: false,
        }
    }

    /// Set first-base eligibility (builder style)
    pub fn with_first_base(mut self, can_play_first: bool) -> Self {
        self.can_play_first = can_play_first;
        self
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn can_play_first(&self) -> bool {
        self.can_play_first
    }

    pub fn set_can_play_first(&mut self, can_play_first: bool) {
        self.can_play_first = can_play_first;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Player::new("Alex");
        let b = Player::new("Alex");
        assert_ne!(a.id(), b.id());
        assert!(!a.can_play_first());
    }

    #[test]
    fn test_deserialize_defaults_first_base() {
        let player: Player = serde_json::from_str(r#"{"id": "3", "name": "Cameron"}"#).unwrap();
        assert_eq!(player.id().as_str(), "3");
        assert!(!player.can_play_first());
    }
}
