pub mod batting;
pub mod check;
pub mod generate;

use anyhow::Context;
use lineup_core_rs::roster::{load_roster, mark_first_base, validate_roster};
use lineup_core_rs::Player;
use std::path::Path;

/// Load, flag and validate a roster file
pub fn read_roster(path: &Path, first_base: &[String]) -> anyhow::Result<Vec<Player>> {
    let mut roster =
        load_roster(path).with_context(|| format!("loading roster from {}", path.display()))?;
    mark_first_base(&mut roster, first_base)?;
    validate_roster(&roster)?;

    tracing::info!(players = roster.len(), path = %path.display(), "roster loaded");
    Ok(roster)
}
