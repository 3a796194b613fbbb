//! Flight simulation core.
//!
//! A bird under constant gravity flies through scrolling obstacle pairs.
//! Each frame the jump signal comes either from the player or from a pilot,
//! the bird is stepped, the track scrolls and scores, and a collision ends
//! the run.

pub mod autopilot;
pub mod collision;
pub mod game_loop;
pub mod physics;
pub mod track;
pub mod types;

pub use autopilot::Pilot;
pub use game_loop::{run_headless, tick, ControlMode, FrameClock, FrameInput, RunOutcome, TickResult};
pub use types::{Bird, Collision, GameState, Obstacle, RunPhase};
