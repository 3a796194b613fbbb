//! Headless autopilot benchmark.
//!
//! Plays batches of seeded auto-solve runs through the same game loop the
//! terminal front end uses, and aggregates scores, survival and causes of
//! death.

mod config;
mod report;
mod runner;

pub use config::BenchConfig;
pub use report::{BenchReport, RunRecord};
pub use runner::run_bench;
