//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::{Assignment, InningAssignment, Player, PlayerAssignment, Position, Schedule};
use crate::models::DiagnosticLog;
use crate::summary::Summary;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
fn extract_required<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract a field with a default value if missing.
fn extract_with_default<T>(dict: &Bound<'_, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Parsers
// ========================================================================

/// Convert a list of player dicts (`id`, `name`, optional `can_play_first`)
pub fn parse_roster(py_players: &Bound<'_, PyList>) -> PyResult<Vec<Player>> {
    let mut roster = Vec::with_capacity(py_players.len());
    for py_player in py_players.iter() {
        let dict: Bound<'_, PyDict> = py_player.downcast_into()?;
        let id: String = extract_required(&dict, "id")?;
        let name: String = extract_required(&dict, "name")?;
        let can_play_first: bool = extract_with_default(&dict, "can_play_first", false)?;
        roster.push(Player::with_id(id, name).with_first_base(can_play_first));
    }
    Ok(roster)
}

/// Convert a list of inning dicts back into a schedule
///
/// Each inning is `{"inning": n, "assignments": {player_id: "P" | ... | "BENCH"}}`.
pub fn parse_schedule(py_innings: &Bound<'_, PyList>) -> PyResult<Schedule> {
    let mut innings = Vec::with_capacity(py_innings.len());
    for py_inning in py_innings.iter() {
        let dict: Bound<'_, PyDict> = py_inning.downcast_into()?;
        let number: usize = extract_required(&dict, "inning")?;
        let py_assignments: Bound<'_, PyDict> = dict
            .get_item("assignments")?
            .ok_or_else(|| PyValueError::new_err("Missing required field 'assignments'"))?
            .downcast_into()?;

        let mut assignments = Vec::with_capacity(py_assignments.len());
        for (key, value) in py_assignments.iter() {
            let player_id: String = key.extract()?;
            let label: String = value.extract()?;
            let assignment: Assignment = label
                .parse()
                .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
            assignments.push(PlayerAssignment {
                player_id: player_id.into(),
                assignment,
            });
        }
        innings.push(InningAssignment::new(number, assignments));
    }
    Ok(Schedule::new(innings, DiagnosticLog::new()))
}

// ========================================================================
// Converters
// ========================================================================

/// Convert a schedule to a list of inning dicts
pub fn schedule_to_py<'py>(py: Python<'py>, schedule: &Schedule) -> PyResult<Bound<'py, PyList>> {
    let innings = PyList::empty(py);
    for inning in schedule.innings() {
        let assignments = PyDict::new(py);
        for entry in inning.assignments() {
            assignments.set_item(entry.player_id.as_str(), entry.assignment.to_string())?;
        }

        let dict = PyDict::new(py);
        dict.set_item("inning", inning.inning())?;
        dict.set_item("assignments", assignments)?;
        innings.append(dict)?;
    }
    Ok(innings)
}

/// Convert a summary to a dict keyed by player id
pub fn summary_to_py<'py>(py: Python<'py>, summary: &Summary) -> PyResult<Bound<'py, PyDict>> {
    let result = PyDict::new(py);
    for player in summary.players() {
        let positions = PyDict::new(py);
        for position in Position::ALL {
            positions.set_item(position.label(), player.count_at(position))?;
        }

        let dict = PyDict::new(py);
        dict.set_item("name", &player.name)?;
        dict.set_item("played", player.played)?;
        dict.set_item("bench", player.bench)?;
        dict.set_item("positions", positions)?;
        result.set_item(player.player_id.as_str(), dict)?;
    }
    Ok(result)
}

/// Convert players to a list of dicts
pub fn players_to_py<'py>(py: Python<'py>, players: &[Player]) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for player in players {
        let dict = PyDict::new(py);
        dict.set_item("id", player.id().as_str())?;
        dict.set_item("name", player.name())?;
        dict.set_item("can_play_first", player.can_play_first())?;
        list.append(dict)?;
    }
    Ok(list)
}
