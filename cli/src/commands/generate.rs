use crate::render;
use lineup_core_rs::{build_summary, generate_schedule};
use serde_json::json;
use std::path::Path;

pub fn generate(path: &Path, first_base: &[String], as_json: bool) -> anyhow::Result<()> {
    let roster = super::read_roster(path, first_base)?;
    let schedule = generate_schedule(&roster)?;
    let summary = build_summary(&roster, &schedule);

    if as_json {
        let output = json!({
            "fingerprint": schedule.fingerprint()?,
            "schedule": schedule,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", render::position_grid(&roster, &schedule));
    println!("{}", render::player_grid(&roster, &schedule, &summary));
    println!("{}", render::position_summary(&roster, &summary));

    let diagnostics = schedule.diagnostics();
    if !diagnostics.is_empty() {
        println!("{}", render::diagnostics(&roster, diagnostics));
    }

    Ok(())
}
