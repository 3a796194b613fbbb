//! Benchmark configuration.

use crate::config::FlightConfig;
use crate::sim::Pilot;

/// Configuration for a batch of headless auto-solve runs.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Seed of the first run; run `i` uses `seed + i` (None = random base seed)
    pub seed: Option<u64>,

    /// Frame cap per run
    pub max_frames: u64,

    /// Policy under test
    pub pilot: Pilot,

    /// World and physics parameters
    pub flight: FlightConfig,

    /// Progress output (0 = silent, 1 = batch header, 2 = also one line per run)
    pub verbosity: u8,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            // Ten simulated minutes at 60 fps
            max_frames: 36_000,
            pilot: Pilot::default(),
            flight: FlightConfig::default(),
            verbosity: 1,
        }
    }
}

impl BenchConfig {
    /// Small, reproducible batch for a quick look at a pilot.
    pub fn quick(pilot: Pilot) -> Self {
        Self {
            num_runs: 20,
            seed: Some(0),
            max_frames: 7_200,
            pilot,
            ..Default::default()
        }
    }
}
