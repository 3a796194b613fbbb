//! Tracing subscriber setup for the two binaries.
//!
//! The filter comes from `RUST_LOG`, falling back to the given default.

use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Log to stderr. Used by the headless benchmark.
pub fn init_stderr(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Directory for the terminal game's log file, if the platform has one.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flapwing").map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Log to `<data dir>/flapwing.log`. The terminal game owns stdout/stderr, so
/// logs go to a file. Returns the file path, or `None` if logging could not
/// be set up (the game runs without logs in that case).
pub fn init_file(default_directive: &str) -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("flapwing.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}
