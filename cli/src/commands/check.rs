use lineup_core_rs::roster::roster_status;
use std::path::Path;

pub fn check(path: &Path, first_base: &[String]) -> anyhow::Result<()> {
    let roster = super::read_roster(path, first_base)?;
    let status = roster_status(&roster);

    println!("{} players", status.players);
    if status.can_generate {
        let plural = if status.subs_per_inning == 1 { "" } else { "s" };
        println!("{} sub{} per inning", status.subs_per_inning, plural);
    } else {
        println!("Need at least {} players", lineup_core_rs::FIELD_SPOTS);
    }
    println!("{} can play 1B", status.first_base_eligible);

    if !status.can_generate {
        anyhow::bail!("roster too small to generate a lineup");
    }
    Ok(())
}
