//! Domain models for the lineup scheduler

pub mod diagnostic;
pub mod player;
pub mod position;
pub mod schedule;

// Re-exports
pub use diagnostic::{Diagnostic, DiagnosticLog};
pub use player::{Player, PlayerId};
pub use position::{Assignment, ParsePositionError, Position, Zone, BENCH_LABEL, FIELD_SPOTS, INNINGS};
pub use schedule::{FingerprintError, InningAssignment, PlayerAssignment, Schedule};
