//! Lineup scheduler
//!
//! Turns a roster into six innings of field assignments.
//!
//! - **tracking**: per-run bookkeeping (position counts, bench counts, last slot)
//! - **sitters**: who sits each inning
//! - **zones**: infield / outfield split and first-base coverage
//! - **positions**: greedy position assignment within a zone
//! - **engine**: the inning loop tying the steps together
//!
//! See `engine.rs` for the entry point.

pub mod engine;
pub mod positions;
pub mod sitters;
pub mod tracking;
pub mod zones;

// Re-export main types for convenience
pub use engine::{bench_per_inning, generate_schedule, ScheduleError};
pub use tracking::{LastSlot, PlayerTracking, TrackingState};
