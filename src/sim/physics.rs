//! Bird physics: constant gravity plus a fixed jump impulse.

use super::types::Bird;
use crate::config::FlightConfig;

/// Advance the bird by `dt` seconds.
///
/// A jump overrides the velocity (it does not add to it), so gravity
/// accumulated this step is discarded. The result may be out of bounds;
/// boundaries are the collision detector's concern.
pub fn step(bird: &Bird, jump_triggered: bool, dt: f64, config: &FlightConfig) -> Bird {
    let mut velocity = bird.velocity + config.gravity * dt;
    if jump_triggered {
        velocity = config.jump_impulse;
    }
    if let Some(max_fall) = config.max_fall_speed {
        velocity = velocity.min(max_fall);
    }

    Bird {
        y: bird.y + velocity * dt,
        velocity,
        ..*bird
    }
}
