//! Critter World - Entry Point
//!
//! Builds one world from a character layout (the built-in sample plan or a
//! map file), renders it, then runs the configured number of turns,
//! rendering the grid after each.

use clap::Parser;
use critter_world::core::config::SimulationConfig;
use critter_world::core::error::Result;
use critter_world::world::{Legend, World};
use std::path::PathBuf;

/// Built-in sample plan: a walled yard with pockets and a handful of
/// critters.
const SAMPLE_PLAN: [&str; 12] = [
    "############################",
    "#      #    #      o      ##",
    "#                          #",
    "#          ####            #",
    "##         #  #     #      #",
    "###          ##     #      #",
    "#          ###      #      #",
    "#  ####                    #",
    "#  ##       o              #",
    "# o #         o        ### #",
    "#   #                      #",
    "############################",
];

#[derive(Parser, Debug)]
#[command(name = "critter-world")]
#[command(about = "Simulate critters bouncing around a walled grid")]
struct Args {
    /// Number of turns to run
    #[arg(long)]
    turns: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Plain-text map file (defaults to the built-in sample plan)
    #[arg(long)]
    map: Option<PathBuf>,

    /// TOML file with simulation settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("critter_world=info")
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(turns) = args.turns {
        config.turns = turns;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;

    let legend = Legend::standard();
    let mut world = match &args.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            World::from_text(&text, legend, config.seed)?
        }
        None => World::from_layout(&SAMPLE_PLAN, legend, config.seed)?,
    };

    println!("{world}");
    for _ in 0..config.turns {
        world.turn();
        println!("{world}");
    }

    tracing::info!(
        turns = config.turns,
        critters = world.critter_count(),
        "run finished"
    );
    Ok(())
}
