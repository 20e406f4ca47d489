//! Python bindings (feature `pyo3`)
//!
//! Exposes the scheduler, summary builder and batting order to Python as
//! plain functions exchanging dicts and lists.

pub mod lineup;
pub mod types;
