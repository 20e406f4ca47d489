//! Plain-text tables for the terminal

use lineup_core_rs::{
    bench_per_inning, Assignment, DiagnosticLog, Diagnostic, Player, PlayerId, Position, Schedule, Summary,
};
use std::fmt::Write;

const NAME_WIDTH: usize = 14;
const CELL_WIDTH: usize = 6;

fn name_of<'a>(roster: &'a [Player], id: &PlayerId) -> &'a str {
    roster
        .iter()
        .find(|p| p.id() == id)
        .map(|p| p.name())
        .unwrap_or("?")
}

fn clip(name: &str) -> String {
    name.chars().take(NAME_WIDTH).collect()
}

fn inning_header(label: &str, schedule: &Schedule) -> String {
    let mut line = format!("{:<w$}", label, w = NAME_WIDTH);
    for inning in schedule.innings() {
        let _ = write!(line, " {:<w$}", format!("Inn {}", inning.inning()), w = NAME_WIDTH);
    }
    line
}

/// One row per position plus one per bench slot, one column per inning
pub fn position_grid(roster: &[Player], schedule: &Schedule) -> String {
    let mut out = String::from("FIELD BY INNING\n");
    let _ = writeln!(out, "{}", inning_header("Position", schedule));

    for position in Position::ALL {
        let mut line = format!("{:<w$}", position.label(), w = NAME_WIDTH);
        for inning in schedule.innings() {
            let name = inning
                .player_at(position)
                .map(|id| name_of(roster, id))
                .unwrap_or("-");
            let _ = write!(line, " {:<w$}", clip(name), w = NAME_WIDTH);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    for slot in 0..bench_per_inning(roster.len()) {
        let label = if slot == 0 { "BENCH" } else { "" };
        let mut line = format!("{:<w$}", label, w = NAME_WIDTH);
        for inning in schedule.innings() {
            let bench = inning.bench();
            let name = bench.get(slot).map(|id| name_of(roster, id)).unwrap_or("-");
            let _ = write!(line, " {:<w$}", clip(name), w = NAME_WIDTH);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out
}

/// One row per player with their slot each inning, plus totals
pub fn player_grid(roster: &[Player], schedule: &Schedule, summary: &Summary) -> String {
    let mut out = String::from("PLAYERS BY INNING\n");

    let mut header = format!("{:<w$}", "Player", w = NAME_WIDTH);
    for inning in schedule.innings() {
        let _ = write!(header, " {:<w$}", inning.inning(), w = CELL_WIDTH);
    }
    let _ = writeln!(out, "{} {:>6} {:>6}", header, "Played", "Bench");

    for player in roster {
        let mut line = format!("{:<w$}", clip(player.name()), w = NAME_WIDTH);
        for slot in schedule.player_line(player.id()) {
            let cell = slot.map(|a: Assignment| a.to_string()).unwrap_or_else(|| "?".to_string());
            let _ = write!(line, " {:<w$}", cell, w = CELL_WIDTH);
        }
        let (played, bench) = summary
            .get(player.id())
            .map(|s| (s.played, s.bench))
            .unwrap_or((0, 0));
        let _ = writeln!(out, "{} {:>6} {:>6}", line, played, bench);
    }

    out
}

/// Innings per position for each player ("·" for never)
pub fn position_summary(roster: &[Player], summary: &Summary) -> String {
    let mut out = String::from("POSITION SUMMARY\n");

    let mut header = format!("{:<w$}", "Player", w = NAME_WIDTH);
    for position in Position::ALL {
        let _ = write!(header, " {:>3}", position.label());
    }
    let _ = writeln!(out, "{} {:>5}", header, "BENCH");

    for player in roster {
        let Some(totals) = summary.get(player.id()) else {
            continue;
        };
        let mut line = format!("{:<w$}", clip(player.name()), w = NAME_WIDTH);
        for position in Position::ALL {
            match totals.count_at(position) {
                0 => line.push_str("   ·"),
                n => {
                    let _ = write!(line, " {:>3}", n);
                }
            }
        }
        let _ = writeln!(out, "{} {:>5}", line, totals.bench);
    }

    out
}

/// Numbered batting order
pub fn batting_order(order: &[Player]) -> String {
    let mut out = String::from("BATTING ORDER\n");
    for (i, player) in order.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, player.name());
    }
    out
}

/// Notes about constraints the scheduler had to relax
pub fn diagnostics(roster: &[Player], log: &DiagnosticLog) -> String {
    let mut out = String::from("NOTES\n");
    for diagnostic in log.diagnostics() {
        let note = match diagnostic {
            Diagnostic::ZonePreferenceIgnored { .. } => "zone rotation not possible this inning".to_string(),
            Diagnostic::ZoneRepeated { player_id, zone, .. } => {
                format!("{} stays in the {}", name_of(roster, player_id), zone)
            }
            Diagnostic::ConsecutiveBench { player_id, .. } => {
                format!("{} sits two innings in a row", name_of(roster, player_id))
            }
            Diagnostic::FirstBaseSwap {
                to_infield,
                to_outfield,
                ..
            } => format!(
                "{} moved to the infield for 1B, {} to the outfield",
                name_of(roster, to_infield),
                name_of(roster, to_outfield)
            ),
            Diagnostic::FirstBaseUnrestricted { player_id, .. } => {
                format!("{} plays 1B (no eligible player fielding)", name_of(roster, player_id))
            }
        };
        let _ = writeln!(out, "Inn {}: {}", diagnostic.inning(), note);
    }
    out
}
