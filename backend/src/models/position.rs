//! Field positions and zones
//!
//! The field has ten fixed positions split into two disjoint zones:
//! - **Infield** (6): P, C, 1B, 2B, 3B, SS
//! - **Outfield** (4): LF, LC, RC, RF
//!
//! A player who is not fielding in an inning is on the bench, which is
//! modelled by [`Assignment::Bench`] rather than as a position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of innings in a game
pub const INNINGS: usize = 6;

/// Number of field positions (players needed to field a team)
pub const FIELD_SPOTS: usize = 10;

/// Label used for a bench slot
pub const BENCH_LABEL: &str = "BENCH";

/// A field position
///
/// Variants are declared in canonical order (infield first, then outfield),
/// which is also the tie-break order used when positions are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "LC")]
    LeftCenter,
    #[serde(rename = "RC")]
    RightCenter,
    #[serde(rename = "RF")]
    RightField,
}

impl Position {
    /// All positions in canonical order
    pub const ALL: [Position; FIELD_SPOTS] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::LeftCenter,
        Position::RightCenter,
        Position::RightField,
    ];

    /// Infield positions in canonical order
    pub const INFIELD: [Position; 6] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
    ];

    /// Outfield positions in canonical order
    pub const OUTFIELD: [Position; 4] = [
        Position::LeftField,
        Position::LeftCenter,
        Position::RightCenter,
        Position::RightField,
    ];

    /// Index of this position within [`Position::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zone this position belongs to
    pub fn zone(self) -> Zone {
        match self {
            Position::Pitcher
            | Position::Catcher
            | Position::FirstBase
            | Position::SecondBase
            | Position::ThirdBase
            | Position::Shortstop => Zone::Infield,
            Position::LeftField
            | Position::LeftCenter
            | Position::RightCenter
            | Position::RightField => Zone::Outfield,
        }
    }

    /// Short scorecard label ("P", "1B", "LC", ...)
    pub fn label(self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::LeftCenter => "LC",
            Position::RightCenter => "RC",
            Position::RightField => "RF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label is neither a position nor "BENCH"
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown position label '{0}'")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

/// One of the two position groups players alternate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Infield,
    Outfield,
}

impl Zone {
    /// Positions belonging to this zone, canonical order
    pub fn positions(self) -> &'static [Position] {
        match self {
            Zone::Infield => &Position::INFIELD,
            Zone::Outfield => &Position::OUTFIELD,
        }
    }

    /// Number of players this zone needs each inning
    pub fn size(self) -> usize {
        self.positions().len()
    }

    /// The other zone
    pub fn opposite(self) -> Zone {
        match self {
            Zone::Infield => Zone::Outfield,
            Zone::Outfield => Zone::Infield,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Infield => f.write_str("infield"),
            Zone::Outfield => f.write_str("outfield"),
        }
    }
}

/// What a player does in a single inning
///
/// Serialized as the position label or `"BENCH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Assignment {
    Field(Position),
    Bench,
}

impl Assignment {
    /// Field position, if fielding
    pub fn position(self) -> Option<Position> {
        match self {
            Assignment::Field(position) => Some(position),
            Assignment::Bench => None,
        }
    }

    pub fn is_bench(self) -> bool {
        matches!(self, Assignment::Bench)
    }

    /// Zone, if fielding
    pub fn zone(self) -> Option<Zone> {
        self.position().map(Position::zone)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Field(position) => f.write_str(position.label()),
            Assignment::Bench => f.write_str(BENCH_LABEL),
        }
    }
}

impl FromStr for Assignment {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(BENCH_LABEL) {
            Ok(Assignment::Bench)
        } else {
            s.parse().map(Assignment::Field)
        }
    }
}

impl From<Assignment> for String {
    fn from(assignment: Assignment) -> Self {
        assignment.to_string()
    }
}

impl TryFrom<String> for Assignment {
    type Error = ParsePositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for Assignment {
    fn from(position: Position) -> Self {
        Assignment::Field(position)
    }
}
