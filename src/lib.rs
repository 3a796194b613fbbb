//! Flapwing - terminal flappy-bird with an auto-solve pilot.
//!
//! This library exposes the simulation core, configuration and benchmark for
//! testing and for the two binaries.

pub mod app;
pub mod bench;
pub mod build_info;
pub mod config;
pub mod logging;
pub mod sim;

pub use config::{ConfigError, Difficulty, FlightConfig};
pub use sim::{Collision, ControlMode, FrameInput, GameState, Pilot, RunPhase};
