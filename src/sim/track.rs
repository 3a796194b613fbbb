//! Obstacle track: scrolling, scoring, despawning and spawning.

use super::types::{GameState, Obstacle};
use crate::config::FlightConfig;
use rand::Rng;
use tracing::debug;

/// What happened to the track during one advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackUpdate {
    pub scored: u32,
    pub spawned: usize,
    pub despawned: usize,
}

/// Advance the track by `dt` seconds and update the score.
///
/// Order within a step: scroll, score, despawn, spawn. Scoring happens before
/// despawning so an obstacle can never leave the track unscored. A dead state
/// is left untouched.
pub fn advance<R: Rng>(
    state: &mut GameState,
    dt: f64,
    config: &FlightConfig,
    rng: &mut R,
) -> TrackUpdate {
    let mut update = TrackUpdate::default();
    if !state.alive {
        return update;
    }

    let shift = config.scroll_speed * dt;
    for obstacle in &mut state.obstacles {
        obstacle.x -= shift;
    }

    let bird_x = state.bird.x;
    for obstacle in &mut state.obstacles {
        if !obstacle.scored && obstacle.x < bird_x {
            obstacle.scored = true;
            update.scored += 1;
        }
    }
    if update.scored > 0 {
        state.score += update.scored;
        debug!(score = state.score, frame = state.frame, "obstacle passed");
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.x >= config.despawn_x);
    update.despawned = before - state.obstacles.len();

    while needs_spawn(&state.obstacles, config) {
        let obstacle = next_obstacle(&state.obstacles, config, rng);
        debug!(
            x = obstacle.x,
            gap_center = obstacle.gap_center,
            "spawned obstacle"
        );
        state.obstacles.push(obstacle);
        update.spawned += 1;
    }

    update
}

/// True when the track is empty or its rightmost obstacle has scrolled
/// strictly past the spawn threshold.
pub fn needs_spawn(obstacles: &[Obstacle], config: &FlightConfig) -> bool {
    match obstacles.last() {
        None => true,
        Some(rightmost) => rightmost.x < config.spawn_threshold(),
    }
}

/// Build the obstacle that follows the current rightmost one.
///
/// The first obstacle enters at the right edge of the world; later ones keep
/// exact spacing from their predecessor regardless of frame timing.
fn next_obstacle<R: Rng>(obstacles: &[Obstacle], config: &FlightConfig, rng: &mut R) -> Obstacle {
    let previous = obstacles.last();
    let x = previous.map_or(config.world_width, |o| o.x + config.obstacle_spacing);
    let gap_center = sample_gap_center(previous.map(|o| o.gap_center), config, rng);
    Obstacle::new(x, gap_center)
}

/// Gap centre for a new obstacle.
///
/// Without a previous gap or drift limit this is a uniform draw from the safe
/// band. Otherwise the new centre lies within `previous ± max_gap_shift`:
/// with `recenter_gaps` a step that would leave the band is mirrored back
/// toward the middle, without it the draw is narrowed to the band.
pub fn sample_gap_center<R: Rng>(previous: Option<f64>, config: &FlightConfig, rng: &mut R) -> f64 {
    let (min, max) = (config.gap_band_min, config.gap_band_max);
    let (Some(prev), Some(shift)) = (previous, config.max_gap_shift) else {
        return uniform(min, max, rng);
    };

    if config.recenter_gaps {
        let step = uniform(-shift, shift, rng);
        let mut next = prev + step;
        if next < min || next > max {
            next = prev - step;
        }
        return next.clamp(min, max);
    }

    let mut lo = min.max(prev - shift);
    let mut hi = max.min(prev + shift);
    if lo > hi {
        // Previous gap lies outside the band; pull back to the nearest edge.
        let edge = prev.clamp(min, max);
        lo = edge;
        hi = edge;
    }
    uniform(lo, hi, rng)
}

fn uniform<R: Rng>(lo: f64, hi: f64, rng: &mut R) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}
