//! Per-frame orchestration and fixed-timestep clock.

use super::autopilot::Pilot;
use super::collision;
use super::physics;
use super::track;
use super::types::{Collision, GameState};
use crate::config::{ConfigError, FlightConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::info;

/// Longest wall-clock gap the clock will catch up on (prevents a burst of
/// frames after a pause or terminal stall).
pub const MAX_CATCH_UP: Duration = Duration::from_millis(100);

/// Where the jump signal comes from. Exactly one source per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Manual,
    AutoSolve(Pilot),
}

impl ControlMode {
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::AutoSolve(_))
    }
}

/// Player input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
}

/// Summary of one simulated frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    pub jumped: bool,
    pub scored: u32,
    pub spawned: usize,
    pub death: Option<Collision>,
}

/// Simulate one frame: pick the jump signal, step the bird, advance the
/// track, then check for collisions. Does nothing once the run is over.
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: FrameInput,
    mode: ControlMode,
    config: &FlightConfig,
    rng: &mut R,
) -> TickResult {
    if !state.alive {
        return TickResult::default();
    }

    let jumped = match mode {
        ControlMode::Manual => input.jump,
        ControlMode::AutoSolve(pilot) => pilot.decide(state, config),
    };

    let dt = config.frame_dt;
    state.bird = physics::step(&state.bird, jumped, dt, config);
    let update = track::advance(state, dt, config, rng);
    state.frame += 1;

    let death = collision::detect(state, config);
    if let Some(cause) = death {
        state.alive = false;
        state.death = Some(cause);
        info!(
            cause = cause.name(),
            score = state.score,
            frame = state.frame,
            "run over"
        );
    }

    TickResult {
        jumped,
        scored: update.scored,
        spawned: update.spawned,
        death,
    }
}

/// Converts wall-clock time into a whole number of fixed simulation frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_secs: f64,
    accumulated_secs: f64,
}

impl FrameClock {
    pub fn new(frame_dt: f64) -> Self {
        Self {
            frame_secs: frame_dt,
            accumulated_secs: 0.0,
        }
    }

    /// Add elapsed time and return how many frames are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated_secs += elapsed.min(MAX_CATCH_UP).as_secs_f64();

        let mut frames = 0;
        while self.accumulated_secs >= self.frame_secs {
            self.accumulated_secs -= self.frame_secs;
            frames += 1;
        }
        frames
    }

    /// Drop any partial frame (after a pause or restart).
    pub fn reset(&mut self) {
        self.accumulated_secs = 0.0;
    }
}

/// Result of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub seed: u64,
    pub score: u32,
    pub frames: u64,
    /// `None` when the frame cap was reached first.
    pub death: Option<Collision>,
}

/// Play one auto-solve run to completion or until `max_frames`.
///
/// The config is validated first; a malformed one never reaches the track.
pub fn run_headless(
    config: &FlightConfig,
    pilot: Pilot,
    seed: u64,
    max_frames: u64,
) -> Result<RunOutcome, ConfigError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::new(config);
    let mode = ControlMode::AutoSolve(pilot);
    info!(seed, pilot = pilot.name(), "run started");

    while state.alive && state.frame < max_frames {
        tick(&mut state, FrameInput::default(), mode, config, &mut rng);
    }

    Ok(RunOutcome {
        seed,
        score: state.score,
        frames: state.frame,
        death: state.death,
    })
}
