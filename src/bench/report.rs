//! Benchmark report generation.

use crate::sim::{Collision, RunOutcome};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-run line of the report.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub seed: u64,
    pub score: u32,
    pub frames: u64,
    /// Collision name, or `None` if the frame cap was reached.
    pub death: Option<&'static str>,
}

impl From<&RunOutcome> for RunRecord {
    fn from(outcome: &RunOutcome) -> Self {
        Self {
            seed: outcome.seed,
            score: outcome.score,
            frames: outcome.frames,
            death: outcome.death.map(|c| c.name()),
        }
    }
}

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub pilot: &'static str,
    pub base_seed: u64,
    pub max_frames: u64,
    pub num_runs: u32,
    /// Runs that were still alive at the frame cap.
    pub runs_survived: u32,

    pub avg_score: f64,
    pub median_score: f64,
    pub max_score: u32,
    pub min_score: u32,
    pub avg_frames: f64,

    /// Deaths per collision cause.
    pub deaths: BTreeMap<&'static str, u32>,

    pub runs: Vec<RunRecord>,
}

impl BenchReport {
    pub fn from_runs(
        outcomes: &[RunOutcome],
        pilot: &'static str,
        base_seed: u64,
        max_frames: u64,
    ) -> Self {
        let num_runs = outcomes.len() as u32;
        let runs_survived = outcomes.iter().filter(|o| o.death.is_none()).count() as u32;

        let mut scores: Vec<u32> = outcomes.iter().map(|o| o.score).collect();
        scores.sort_unstable();

        let avg_score = mean(scores.iter().map(|&s| s as f64));
        let avg_frames = mean(outcomes.iter().map(|o| o.frames as f64));
        let median_score = median(&scores);

        let mut deaths: BTreeMap<&'static str, u32> =
            Collision::ALL.iter().map(|c| (c.name(), 0)).collect();
        for cause in outcomes.iter().filter_map(|o| o.death) {
            *deaths.entry(cause.name()).or_insert(0) += 1;
        }

        Self {
            pilot,
            base_seed,
            max_frames,
            num_runs,
            runs_survived,
            avg_score,
            median_score,
            max_score: scores.last().copied().unwrap_or(0),
            min_score: scores.first().copied().unwrap_or(0),
            avg_frames,
            deaths,
            runs: outcomes.iter().map(RunRecord::from).collect(),
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══════════════════════════════════════\n");
        out.push_str(&format!(" AUTOPILOT BENCHMARK ({})\n", self.pilot));
        out.push_str("═══════════════════════════════════════\n");
        out.push_str(&format!(" Runs:           {}\n", self.num_runs));
        out.push_str(&format!(" Base seed:      {}\n", self.base_seed));
        out.push_str(&format!(
            " Survived cap:   {} / {} ({} frames)\n",
            self.runs_survived, self.num_runs, self.max_frames
        ));
        out.push('\n');
        out.push_str(&format!(" Avg score:      {:.2}\n", self.avg_score));
        out.push_str(&format!(" Median score:   {:.1}\n", self.median_score));
        out.push_str(&format!(
            " Min / Max:      {} / {}\n",
            self.min_score, self.max_score
        ));
        out.push_str(&format!(" Avg frames:     {:.0}\n", self.avg_frames));
        out.push('\n');
        out.push_str(" Deaths:\n");
        for (cause, count) in &self.deaths {
            out.push_str(&format!("   {:<10} {}\n", cause, count));
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Median of an already sorted slice.
fn median(sorted: &[u32]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2] as f64,
        n => (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0,
    }
}
