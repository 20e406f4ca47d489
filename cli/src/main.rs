use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "lineup",
    about = "Fair six-inning lineups for youth baseball rosters",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the field schedule and per-player summary.
    ///
    /// The roster file is JSON when it ends in .json
    /// ([{"id", "name", "can_play_first"}]), otherwise plain text with one
    /// name per line.
    Generate {
        /// Roster file
        #[arg(short, long)]
        roster: PathBuf,
        /// Mark a player (by name) as able to play first base; repeatable
        #[arg(short = 'f', long = "first-base")]
        first_base: Vec<String>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Shuffle a batting order
    Batting {
        #[arg(short, long)]
        roster: PathBuf,
        /// Seed for a reproducible order
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Check a roster without generating anything
    Check {
        #[arg(short, long)]
        roster: PathBuf,
        #[arg(short = 'f', long = "first-base")]
        first_base: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lineup=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            roster,
            first_base,
            json,
        } => commands::generate::generate(&roster, &first_base, json),
        Commands::Batting { roster, seed, json } => commands::batting::batting(&roster, seed, json),
        Commands::Check { roster, first_base } => commands::check::check(&roster, &first_base),
    }
}
