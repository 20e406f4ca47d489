//! Scheduling diagnostics
//!
//! The scheduler is greedy and total: it always produces a schedule, even when
//! a fairness preference cannot be honoured. Each time it has to relax one, it
//! records a [`Diagnostic`] so callers can see exactly where and for whom.
//!
//! # Diagnostic Types
//!
//! - **ZonePreferenceIgnored**: neither preferred-zone pool was large enough
//! - **ZoneRepeated**: a fielder plays the same zone as last inning
//! - **ConsecutiveBench**: a player had to sit two innings in a row
//! - **FirstBaseSwap**: zones were swapped to put an eligible player in the infield
//! - **FirstBaseUnrestricted**: 1B went to an ineligible player (none eligible fielding)
//!
//! # Example
//!
//! ```rust
//! use lineup_core_rs::models::{Diagnostic, PlayerId, Zone};
//!
//! let diagnostic = Diagnostic::ZoneRepeated {
//!     inning: 3,
//!     player_id: PlayerId::new("12"),
//!     zone: Zone::Outfield,
//! };
//!
//! assert_eq!(diagnostic.inning(), 3);
//! assert_eq!(diagnostic.diagnostic_type(), "ZoneRepeated");
//! ```

use crate::models::player::PlayerId;
use crate::models::position::Zone;
use serde::{Deserialize, Serialize};

/// A relaxed scheduling constraint, tagged with its 1-based inning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Diagnostic {
    /// Zone balancing fell back to least-infield-time ordering
    ZonePreferenceIgnored {
        inning: usize,
        prefer_infield: usize,
        prefer_outfield: usize,
    },

    /// Fielder assigned to the zone they occupied last inning
    ZoneRepeated {
        inning: usize,
        player_id: PlayerId,
        zone: Zone,
    },

    /// Player benched after sitting the previous inning
    ConsecutiveBench { inning: usize, player_id: PlayerId },

    /// Eligible outfielder moved to the infield to cover first base
    FirstBaseSwap {
        inning: usize,
        to_infield: PlayerId,
        to_outfield: PlayerId,
    },

    /// First base assigned without eligibility (no eligible fielder)
    FirstBaseUnrestricted { inning: usize, player_id: PlayerId },
}

impl Diagnostic {
    /// Get the inning this diagnostic refers to
    pub fn inning(&self) -> usize {
        match self {
            Diagnostic::ZonePreferenceIgnored { inning, .. } => *inning,
            Diagnostic::ZoneRepeated { inning, .. } => *inning,
            Diagnostic::ConsecutiveBench { inning, .. } => *inning,
            Diagnostic::FirstBaseSwap { inning, .. } => *inning,
            Diagnostic::FirstBaseUnrestricted { inning, .. } => *inning,
        }
    }

    /// Get a short description of the diagnostic type
    pub fn diagnostic_type(&self) -> &'static str {
        match self {
            Diagnostic::ZonePreferenceIgnored { .. } => "ZonePreferenceIgnored",
            Diagnostic::ZoneRepeated { .. } => "ZoneRepeated",
            Diagnostic::ConsecutiveBench { .. } => "ConsecutiveBench",
            Diagnostic::FirstBaseSwap { .. } => "FirstBaseSwap",
            Diagnostic::FirstBaseUnrestricted { .. } => "FirstBaseUnrestricted",
        }
    }

    /// Get the player this diagnostic is about, if it concerns one player
    pub fn player_id(&self) -> Option<&PlayerId> {
        match self {
            Diagnostic::ZoneRepeated { player_id, .. } => Some(player_id),
            Diagnostic::ConsecutiveBench { player_id, .. } => Some(player_id),
            Diagnostic::FirstBaseSwap { to_infield, .. } => Some(to_infield),
            Diagnostic::FirstBaseUnrestricted { player_id, .. } => Some(player_id),
            Diagnostic::ZonePreferenceIgnored { .. } => None,
        }
    }
}

/// Ordered log of diagnostics for one schedule.
///
/// A thin wrapper around `Vec<Diagnostic>` with query helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticLog {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Append a diagnostic
    pub fn log(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get all diagnostics in the order they were raised
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics for a specific inning
    pub fn for_inning(&self, inning: usize) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.inning() == inning)
            .collect()
    }

    /// Get diagnostics of a specific type
    pub fn of_type(&self, diagnostic_type: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.diagnostic_type() == diagnostic_type)
            .collect()
    }

    /// Get diagnostics concerning a specific player
    pub fn for_player(&self, player_id: &PlayerId) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.player_id() == Some(player_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_queries() {
        let mut log = DiagnosticLog::new();
        assert!(log.is_empty());

        log.log(Diagnostic::ConsecutiveBench {
            inning: 2,
            player_id: PlayerId::new("a"),
        });
        log.log(Diagnostic::ZonePreferenceIgnored {
            inning: 2,
            prefer_infield: 5,
            prefer_outfield: 3,
        });
        log.log(Diagnostic::FirstBaseUnrestricted {
            inning: 4,
            player_id: PlayerId::new("b"),
        });

        assert_eq!(log.len(), 3);
        assert_eq!(log.for_inning(2).len(), 2);
        assert_eq!(log.of_type("FirstBaseUnrestricted").len(), 1);
        assert_eq!(log.for_player(&PlayerId::new("a")).len(), 1);
        assert!(log.for_player(&PlayerId::new("c")).is_empty());
    }

    #[test]
    fn test_serialized_with_type_tag() {
        let diagnostic = Diagnostic::ConsecutiveBench {
            inning: 5,
            player_id: PlayerId::new("9"),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["type"], "ConsecutiveBench");
        assert_eq!(json["player_id"], "9");
    }
}
