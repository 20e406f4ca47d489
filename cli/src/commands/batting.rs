use crate::render;
use lineup_core_rs::{generate_batting_order, generate_batting_order_with, RngManager};
use std::path::Path;

pub fn batting(path: &Path, seed: Option<u64>, as_json: bool) -> anyhow::Result<()> {
    let roster = super::read_roster(path, &[])?;
    let order = match seed {
        Some(seed) => generate_batting_order_with(&roster, &mut RngManager::new(seed)),
        None => generate_batting_order(&roster),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        println!("{}", render::batting_order(&order));
    }

    Ok(())
}
