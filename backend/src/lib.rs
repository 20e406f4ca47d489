//! Lineup Scheduler Core - Rust Engine
//!
//! Builds fair six-inning field lineups for a youth baseball roster.
//!
//! # Architecture
//!
//! - **models**: Domain types (Player, Position, Schedule, Diagnostic)
//! - **scheduler**: Inning loop (sitters, zones, positions, tracking)
//! - **summary**: Per-player aggregates over a finished schedule
//! - **batting**: Random batting orders
//! - **roster**: Text/JSON import and validation
//! - **rng**: Seedable random number generation
//!
//! # Critical Invariants
//!
//! 1. Scheduling is deterministic (ties break on roster index, no randomness)
//! 2. No player sits two innings in a row while a rested player can sit instead
//! 3. First base goes to an eligible player whenever one is fielding

// Module declarations
pub mod batting;
pub mod models;
pub mod rng;
pub mod roster;
pub mod scheduler;
pub mod summary;

// Re-exports for convenience
pub use batting::{generate_batting_order, generate_batting_order_with};
pub use models::{
    diagnostic::{Diagnostic, DiagnosticLog},
    player::{Player, PlayerId},
    position::{Assignment, Position, Zone, FIELD_SPOTS, INNINGS},
    schedule::{InningAssignment, PlayerAssignment, Schedule},
};
pub use rng::RngManager;
pub use roster::{RosterError, RosterStatus};
pub use scheduler::{bench_per_inning, generate_schedule, ScheduleError};
pub use summary::{build_summary, PlayerSummary, Summary};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn lineup_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::lineup::generate_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::lineup::build_summary, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::lineup::generate_batting_order, m)?)?;
    Ok(())
}
