//! Flight simulation data structures.

use crate::config::FlightConfig;
use serde::Serialize;

/// The bird. Only its vertical state changes; `x` is fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bird {
    /// Horizontal centre (constant).
    pub x: f64,
    /// Vertical centre. 0 = ceiling, grows downward.
    pub y: f64,
    /// Vertical velocity in units/second (negative = upward).
    pub velocity: f64,
}

/// An upper + lower barrier pair with a passable gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    /// Vertical centre of the gap.
    pub gap_center: f64,
    /// Whether passing this obstacle has already been scored.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_center: f64) -> Self {
        Self {
            x,
            gap_center,
            scored: false,
        }
    }
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Collision {
    Ceiling,
    Floor,
    Obstacle,
}

impl Collision {
    pub const ALL: [Collision; 3] = [Collision::Ceiling, Collision::Floor, Collision::Obstacle];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Obstacle => "obstacle",
        }
    }
}

/// Run lifecycle. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    Over,
}

/// State of a single run, owned by whoever drives the frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub bird: Bird,
    /// Ordered by ascending `x`.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub alive: bool,
    /// Frames simulated so far.
    pub frame: u64,
    /// Set on the frame the run ended.
    pub death: Option<Collision>,
}

impl GameState {
    /// Fresh run: bird at its start position, no obstacles, score 0.
    pub fn new(config: &FlightConfig) -> Self {
        Self {
            bird: Bird {
                x: config.bird_x,
                y: config.start_y,
                velocity: config.start_velocity,
            },
            obstacles: Vec::new(),
            score: 0,
            alive: true,
            frame: 0,
            death: None,
        }
    }

    pub fn phase(&self) -> RunPhase {
        if self.alive {
            RunPhase::Running
        } else {
            RunPhase::Over
        }
    }

    /// Simulated seconds elapsed.
    pub fn elapsed_secs(&self, config: &FlightConfig) -> f64 {
        self.frame as f64 * config.frame_dt
    }
}
