//! Claim Simulator
//!
//! Replays a claim scenario (or a seeded random walk) through a territory
//! with auto-fill enabled, then prints the resulting map.

use std::path::PathBuf;

use clap::Parser;

use faction_claims::core::config::{set_config, FillConfig};
use faction_claims::core::error::Result;
use faction_claims::fill::ClaimFiller;
use faction_claims::sim::{render_json, render_level, Scenario};

/// Claim Simulator - replay faction claims with enclosed-area filling
#[derive(Parser, Debug)]
#[command(name = "claim_sim")]
#[command(about = "Replay faction claims and show what gets auto-filled")]
struct Args {
    /// Scenario TOML file to replay
    #[arg(long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a random walk of this many claims instead of a scenario
    #[arg(long)]
    random: Option<usize>,

    /// Random seed for reproducible walks
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of factions in a random walk
    #[arg(long, default_value_t = 2)]
    factions: usize,

    /// Fill config TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print final claims as JSON instead of a map
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("faction_claims=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FillConfig::load(path)?,
        None => FillConfig::default(),
    };
    if set_config(config).is_err() {
        tracing::warn!("Fill config was already set, keeping the existing one");
    }

    let scenario = match (&args.scenario, args.random) {
        (Some(path), _) => Scenario::load(path)?,
        (None, Some(count)) => Scenario::random_walk(count, args.factions, args.seed),
        (None, None) => {
            eprintln!("Nothing to do: pass --scenario <file> or --random <n>");
            std::process::exit(2);
        }
    };

    tracing::info!(
        "Replaying {} claims on {}",
        scenario.claims.len(),
        scenario.level
    );
    let replay = scenario.replay(ClaimFiller::default());

    if args.json {
        println!(
            "{}",
            render_json(&replay.store, &replay.level, &replay.factions)?
        );
        return Ok(());
    }

    print!("{}", render_level(&replay.store, &replay.level, &replay.factions));
    println!();
    for (name, id) in &replay.factions {
        println!(
            "{}: {} cells",
            name,
            replay.store.count_for(*id, &replay.level)
        );
    }
    if replay.refused > 0 {
        println!("{} claims refused (cell already taken)", replay.refused);
    }

    Ok(())
}
