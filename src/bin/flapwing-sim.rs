//! Autopilot benchmark CLI.
//!
//! Plays seeded auto-solve runs headlessly and reports how far the pilot gets.
//!
//! Usage:
//!   cargo run --bin flapwing-sim -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin flapwing-sim                          # 100 runs, threshold pilot
//!   cargo run --bin flapwing-sim -- -n 500 -p glide-path  # 500 runs, glide-path pilot
//!   cargo run --bin flapwing-sim -- --seed 42 --json      # reproducible, JSON output

use anyhow::Result;
use clap::Parser;
use flapwing::bench::{run_bench, BenchConfig};
use flapwing::{logging, Difficulty, FlightConfig, Pilot};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flapwing-sim")]
#[command(about = "Benchmark the flapwing auto-solve pilots")]
struct Args {
    /// Number of runs
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Seed of the first run; run i uses seed + i (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frame cap per run (60 frames = 1 simulated second by default)
    #[arg(short = 'f', long, default_value_t = 36_000)]
    max_frames: u64,

    /// Pilot under test: threshold or glide-path
    #[arg(short, long, default_value = "threshold")]
    pilot: Pilot,

    /// Difficulty preset: novice, apprentice, journeyman, master
    #[arg(short, long, default_value = "apprentice")]
    difficulty: Difficulty,

    /// JSON file overriding world/physics parameters (replaces the preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one line per run
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init_stderr("warn");
    let args = Args::parse();

    let flight = match &args.config {
        Some(path) => FlightConfig::from_json_file(path)?,
        None => FlightConfig::for_difficulty(args.difficulty),
    };

    let config = BenchConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_frames: args.max_frames,
        pilot: args.pilot,
        flight,
        verbosity: match (args.json, args.verbose) {
            (true, _) => 0,
            (false, true) => 2,
            (false, false) => 1,
        },
    };

    let report = run_bench(&config)?;

    if args.json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
