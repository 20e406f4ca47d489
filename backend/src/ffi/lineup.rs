//! PyO3 functions for the lineup scheduler
//!
//! # Example (from Python)
//!
//! ```python
//! from lineup_core_rs import generate_schedule, build_summary
//!
//! players = [{"id": str(i), "name": f"Player {i}", "can_play_first": i < 3} for i in range(13)]
//! innings = generate_schedule(players)
//! summary = build_summary(players, innings)
//! print(summary["0"]["bench"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{parse_roster, parse_schedule, players_to_py, schedule_to_py, summary_to_py};
use crate::rng::RngManager;

/// Generate a six-inning schedule
///
/// Raises ValueError if the roster has fewer than ten players.
#[pyfunction]
pub fn generate_schedule<'py>(py: Python<'py>, players: &Bound<'py, PyList>) -> PyResult<Bound<'py, PyList>> {
    let roster = parse_roster(players)?;
    let schedule = crate::scheduler::generate_schedule(&roster)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    schedule_to_py(py, &schedule)
}

/// Summarise a schedule per player
#[pyfunction]
pub fn build_summary<'py>(
    py: Python<'py>,
    players: &Bound<'py, PyList>,
    innings: &Bound<'py, PyList>,
) -> PyResult<Bound<'py, PyDict>> {
    let roster = parse_roster(players)?;
    let schedule = parse_schedule(innings)?;
    summary_to_py(py, &crate::summary::build_summary(&roster, &schedule))
}

/// Random batting order; pass `seed` for a reproducible order
#[pyfunction]
#[pyo3(signature = (players, seed=None))]
pub fn generate_batting_order<'py>(
    py: Python<'py>,
    players: &Bound<'py, PyList>,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyList>> {
    let roster = parse_roster(players)?;
    let mut rng = match seed {
        Some(seed) => RngManager::new(seed),
        None => RngManager::from_entropy(),
    };
    let order = crate::batting::generate_batting_order_with(&roster, &mut rng);
    players_to_py(py, &order)
}
