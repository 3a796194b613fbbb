//! Auto-solve pilots: per-frame jump decisions from the current state.
//!
//! Both pilots are reflexive. They look at the state once per frame and never
//! simulate trajectories forward.

use super::types::{GameState, Obstacle};
use crate::config::{ConfigError, FlightConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

/// Available jump policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pilot {
    /// Jump when at or below the next gap centre (offset by the margin) and not rising.
    #[default]
    Threshold,
    /// Follow a line between consecutive gap centres.
    GlidePath,
}

impl Pilot {
    pub const ALL: [Pilot; 2] = [Pilot::Threshold, Pilot::GlidePath];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::GlidePath => "glide-path",
        }
    }

    /// The next pilot in `ALL`, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Threshold => Self::GlidePath,
            Self::GlidePath => Self::Threshold,
        }
    }

    pub fn decide(&self, state: &GameState, config: &FlightConfig) -> bool {
        let jump = match self {
            Self::Threshold => decide(state, config),
            Self::GlidePath => decide_glide_path(state, config),
        };
        trace!(
            pilot = self.name(),
            y = state.bird.y,
            velocity = state.bird.velocity,
            jump,
            "pilot decision"
        );
        jump
    }
}

impl FromStr for Pilot {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threshold" => Ok(Self::Threshold),
            "glide-path" | "glide_path" | "glide" => Ok(Self::GlidePath),
            _ => Err(ConfigError::UnknownPilot(s.to_string())),
        }
    }
}

/// First obstacle not yet fully passed by the bird's centre.
pub fn next_obstacle<'a>(state: &'a GameState, config: &FlightConfig) -> Option<&'a Obstacle> {
    state
        .obstacles
        .iter()
        .find(|o| o.x + config.obstacle_width > state.bird.x)
}

/// Vertical target: the next gap centre, or mid-world when nothing is ahead.
pub fn target_y(state: &GameState, config: &FlightConfig) -> f64 {
    next_obstacle(state, config).map_or(config.world_height / 2.0, |o| o.gap_center)
}

/// Threshold rule: jump when `y > target - margin` and the bird is not rising.
///
/// The fixed impulse always lifts the bird by the same amount, so the margin
/// shifts where in the gap that lift starts.
pub fn decide(state: &GameState, config: &FlightConfig) -> bool {
    let target = target_y(state, config);
    let bird = &state.bird;
    bird.y > target - config.autopilot_margin && bird.velocity >= 0.0
}

/// Glide-path rule.
///
/// The path ramps from the gap centre of the obstacle just cleared to the gap
/// centre of the next one, and levels out one flap period of scrolling before
/// the bird reaches the next obstacle, so the bird enters every gap already
/// cycling around its centre. With nothing cleared yet, the path is flat at
/// the next gap. The bird jumps whenever it is on or below the flap line and
/// not rising.
pub fn decide_glide_path(state: &GameState, config: &FlightConfig) -> bool {
    let bird = &state.bird;
    let half_bird = config.bird_width / 2.0;

    // First obstacle the bird box still overlaps or has yet to reach.
    let Some(idx) = state
        .obstacles
        .iter()
        .position(|o| o.x + config.obstacle_width + half_bird >= bird.x)
    else {
        return decide(state, config);
    };

    let next = &state.obstacles[idx];
    let ramp_end = next.x - half_bird - glide_lead(config);
    let path_y = match idx.checked_sub(1).map(|i| &state.obstacles[i]) {
        Some(prev) if bird.x < ramp_end => {
            let ramp_start = prev.x + config.obstacle_width / 2.0;
            let t = ((bird.x - ramp_start) / (ramp_end - ramp_start)).clamp(0.0, 1.0);
            prev.gap_center + (next.gap_center - prev.gap_center) * t
        }
        _ => next.gap_center,
    };

    bird.y >= path_y + flap_offset(config) && bird.velocity >= 0.0
}

/// Horizontal distance scrolled during one full flap (rise and fall back).
fn glide_lead(config: &FlightConfig) -> f64 {
    config.scroll_speed * 2.0 * config.jump_impulse.abs() / config.gravity
}

/// Distance below the path at which to flap so the flap arc is centred on it.
///
/// The arc spans `rise` above the flap line and up to one frame of fall
/// below it.
fn flap_offset(config: &FlightConfig) -> f64 {
    let rise = config.jump_impulse * config.jump_impulse / (2.0 * config.gravity);
    let overshoot = config.jump_impulse.abs() * config.frame_dt;
    (rise - overshoot) / 2.0
}
