//! Interactive session state: the current run plus everything the terminal
//! front end needs around it (mode, pilot, seeds, queued input, best score).
//!
//! Kept free of terminal types so it can be driven from tests.

use crate::config::{ConfigError, Difficulty, FlightConfig};
use crate::sim::{tick, ControlMode, FrameClock, FrameInput, GameState, Pilot, RunPhase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::info;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Space, Up or Enter.
    Jump,
    /// Switch between manual and auto-solve (starts a new run).
    ToggleAutoSolve,
    /// Next pilot policy.
    CyclePilot,
    Restart,
    Quit,
    Other,
}

/// Session settings chosen at startup.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub config: FlightConfig,
    /// Preset the config came from, for display. `None` for a config file.
    pub difficulty: Option<Difficulty>,
    pub auto_solve: bool,
    pub pilot: Pilot,
    /// Seed of the first run; later runs use `seed + n`.
    pub seed: u64,
}

/// One interactive session: a sequence of runs.
#[derive(Debug)]
pub struct App {
    pub config: FlightConfig,
    pub difficulty: Option<Difficulty>,
    pub auto_solve: bool,
    pub pilot: Pilot,
    pub state: GameState,
    /// Seed of the current run.
    pub seed: u64,
    base_seed: u64,
    runs_started: u64,
    rng: ChaCha8Rng,
    clock: FrameClock,
    /// True until the player presses Jump in manual mode. Physics paused while waiting.
    pub waiting_to_start: bool,
    /// Jump waiting to be consumed by the next frame.
    pub jump_queued: bool,
    /// Best score over all runs this session.
    pub best_score: u32,
    pub should_quit: bool,
}

impl App {
    /// Start a session. Fails if the config does not validate.
    pub fn new(options: AppOptions) -> Result<Self, ConfigError> {
        options.config.validate()?;
        let mut app = Self {
            clock: FrameClock::new(options.config.frame_dt),
            state: GameState::new(&options.config),
            config: options.config,
            difficulty: options.difficulty,
            auto_solve: options.auto_solve,
            pilot: options.pilot,
            seed: options.seed,
            base_seed: options.seed,
            runs_started: 0,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
            waiting_to_start: true,
            jump_queued: false,
            best_score: 0,
            should_quit: false,
        };
        app.new_run();
        Ok(app)
    }

    /// Control mode for the current run.
    pub fn control_mode(&self) -> ControlMode {
        if self.auto_solve {
            ControlMode::AutoSolve(self.pilot)
        } else {
            ControlMode::Manual
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase()
    }

    /// Start a fresh run with the next seed.
    pub fn new_run(&mut self) {
        self.seed = self.base_seed.wrapping_add(self.runs_started);
        self.runs_started += 1;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.state = GameState::new(&self.config);
        self.clock.reset();
        self.jump_queued = false;
        // Auto-solve needs no key press to begin.
        self.waiting_to_start = !self.auto_solve;
        info!(
            seed = self.seed,
            auto_solve = self.auto_solve,
            pilot = self.pilot.name(),
            "run started"
        );
    }

    /// Handle one input action.
    pub fn process_input(&mut self, input: AppInput) {
        match input {
            AppInput::Quit => self.should_quit = true,
            AppInput::ToggleAutoSolve => {
                self.auto_solve = !self.auto_solve;
                self.new_run();
            }
            AppInput::CyclePilot => {
                // Takes effect on the next frame; the run continues.
                self.pilot = self.pilot.cycle();
            }
            AppInput::Restart => self.new_run(),
            AppInput::Jump => {
                if self.phase() == RunPhase::Over {
                    self.new_run();
                    return;
                }
                if self.auto_solve {
                    return;
                }
                self.waiting_to_start = false;
                self.jump_queued = true;
            }
            AppInput::Other => {}
        }
    }

    /// Advance the run by wall-clock `elapsed`. Steps in fixed frames.
    /// Returns true if the state changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.phase() == RunPhase::Over || self.waiting_to_start {
            return false;
        }

        let frames = self.clock.advance(elapsed);
        self.step_frames(frames)
    }

    /// Simulate exactly `frames` frames. A queued jump is consumed by the first.
    pub fn step_frames(&mut self, frames: u32) -> bool {
        let mode = self.control_mode();
        let mut changed = false;

        for _ in 0..frames {
            if !self.state.alive {
                break;
            }
            let input = FrameInput {
                jump: std::mem::take(&mut self.jump_queued),
            };
            tick(&mut self.state, input, mode, &self.config, &mut self.rng);
            changed = true;
        }

        self.best_score = self.best_score.max(self.state.score);
        changed
    }
}
