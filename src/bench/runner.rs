//! Batch runner: plays seeded headless runs through the shared game loop.

use super::config::BenchConfig;
use super::report::BenchReport;
use crate::config::ConfigError;
use crate::sim::{run_headless, RunOutcome};

/// Run the whole batch and return a report.
///
/// Progress goes to stdout according to `config.verbosity`.
pub fn run_bench(config: &BenchConfig) -> Result<BenchReport, ConfigError> {
    config.flight.validate()?;
    let base_seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut outcomes = Vec::with_capacity(config.num_runs as usize);

    if let Some(header) = batch_header(config) {
        println!("{}", header);
        println!();
    }

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run_idx as u64);
        let outcome = run_headless(&config.flight, config.pilot, seed, config.max_frames)?;

        if let Some(line) = run_line(config, run_idx, &outcome) {
            println!("{}", line);
        }
        outcomes.push(outcome);
    }

    Ok(BenchReport::from_runs(
        &outcomes,
        config.pilot.name(),
        base_seed,
        config.max_frames,
    ))
}

/// Announcement printed before the batch (verbosity 1 and up).
fn batch_header(config: &BenchConfig) -> Option<String> {
    (config.verbosity >= 1).then(|| {
        format!(
            "Running {} runs with the {} pilot...",
            config.num_runs,
            config.pilot.name()
        )
    })
}

/// One line per finished run (verbosity 2 and up).
fn run_line(config: &BenchConfig, run_idx: u32, outcome: &RunOutcome) -> Option<String> {
    (config.verbosity >= 2).then(|| {
        format!(
            "Run {}/{} - seed {}, score {}, frames {}, {}",
            run_idx + 1,
            config.num_runs,
            outcome.seed,
            outcome.score,
            outcome.frames,
            outcome.death.map_or("survived", |c| c.name())
        )
    })
}
