//! Collision detection against world bounds and obstacle barriers.
//!
//! Everything here is a pure function of the state; nothing is mutated.
//! Bounds are inclusive: touching a barrier, the ceiling or the floor counts.

use super::types::{Collision, GameState, Obstacle};
use crate::config::FlightConfig;

/// Axis-aligned box in world units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Inclusive overlap test.
    pub fn touches(&self, other: &Bounds) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }
}

/// Bounding box of the bird.
pub fn bird_bounds(state: &GameState, config: &FlightConfig) -> Bounds {
    let half_w = config.bird_width / 2.0;
    let half_h = config.bird_height / 2.0;
    Bounds {
        left: state.bird.x - half_w,
        right: state.bird.x + half_w,
        top: state.bird.y - half_h,
        bottom: state.bird.y + half_h,
    }
}

/// Top and bottom edge of an obstacle's gap.
pub fn gap_bounds(obstacle: &Obstacle, config: &FlightConfig) -> (f64, f64) {
    let half = config.gap_height / 2.0;
    (obstacle.gap_center - half, obstacle.gap_center + half)
}

/// Upper and lower barrier rectangles of an obstacle.
pub fn barrier_bounds(obstacle: &Obstacle, config: &FlightConfig) -> (Bounds, Bounds) {
    let (gap_top, gap_bottom) = gap_bounds(obstacle, config);
    let left = obstacle.x;
    let right = obstacle.x + config.obstacle_width;
    (
        Bounds {
            left,
            right,
            top: f64::NEG_INFINITY,
            bottom: gap_top,
        },
        Bounds {
            left,
            right,
            top: gap_bottom,
            bottom: f64::INFINITY,
        },
    )
}

/// First collision in the current state, if any.
pub fn detect(state: &GameState, config: &FlightConfig) -> Option<Collision> {
    let bird = bird_bounds(state, config);

    if bird.top <= 0.0 {
        return Some(Collision::Ceiling);
    }
    if bird.bottom >= config.world_height {
        return Some(Collision::Floor);
    }

    state
        .obstacles
        .iter()
        .map(|o| barrier_bounds(o, config))
        .any(|(upper, lower)| bird.touches(&upper) || bird.touches(&lower))
        .then_some(Collision::Obstacle)
}

/// True if the bird is still alive.
pub fn check(state: &GameState, config: &FlightConfig) -> bool {
    detect(state, config).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(y: f64, obstacles: Vec<Obstacle>) -> (GameState, FlightConfig) {
        let config = FlightConfig::default();
        let mut state = GameState::new(&config);
        state.bird.y = y;
        state.obstacles = obstacles;
        (state, config)
    }

    #[test]
    fn test_open_sky_is_alive() {
        let (state, config) = state_at(300.0, Vec::new());
        assert!(check(&state, &config));
        assert_eq!(detect(&state, &config), None);
    }

    #[test]
    fn test_position_exactly_at_ceiling_collides() {
        let (state, config) = state_at(0.0, Vec::new());
        assert_eq!(detect(&state, &config), Some(Collision::Ceiling));
    }

    #[test]
    fn test_position_exactly_at_floor_collides() {
        let (state, config) = state_at(600.0, Vec::new());
        assert_eq!(detect(&state, &config), Some(Collision::Floor));
    }

    #[test]
    fn test_outside_world_collides() {
        let (state, config) = state_at(-50.0, Vec::new());
        assert!(!check(&state, &config));
        let (state, config) = state_at(650.0, Vec::new());
        assert!(!check(&state, &config));
    }

    #[test]
    fn test_box_edge_touching_floor_collides() {
        // bird height 24: bottom edge lands on 600
        let (state, config) = state_at(588.0, Vec::new());
        assert_eq!(detect(&state, &config), Some(Collision::Floor));
        let (state, config) = state_at(587.9, Vec::new());
        assert!(check(&state, &config));
    }

    #[test]
    fn test_inside_gap_is_alive() {
        // bird x 200 spans 183..217; obstacle spans 180..260
        let (state, config) = state_at(300.0, vec![Obstacle::new(180.0, 300.0)]);
        assert!(check(&state, &config));
    }

    #[test]
    fn test_upper_barrier_collides() {
        // gap 200..400, bird top at 190
        let (state, config) = state_at(202.0, vec![Obstacle::new(180.0, 300.0)]);
        assert_eq!(detect(&state, &config), Some(Collision::Obstacle));
    }

    #[test]
    fn test_lower_barrier_collides() {
        let (state, config) = state_at(395.0, vec![Obstacle::new(180.0, 300.0)]);
        assert_eq!(detect(&state, &config), Some(Collision::Obstacle));
    }

    #[test]
    fn test_touching_gap_edge_collides() {
        // bird top exactly at gap top (200)
        let (state, config) = state_at(212.0, vec![Obstacle::new(180.0, 300.0)]);
        assert!(!check(&state, &config));
    }

    #[test]
    fn test_no_horizontal_overlap_is_alive() {
        // obstacle starts at 218, bird right edge 217
        let (state, config) = state_at(100.0, vec![Obstacle::new(218.0, 400.0)]);
        assert!(check(&state, &config));
        // obstacle ends at 182, bird left edge 183
        let (state, config) = state_at(100.0, vec![Obstacle::new(102.0, 400.0)]);
        assert!(check(&state, &config));
    }

    #[test]
    fn test_horizontal_edge_touch_collides() {
        // obstacle left edge exactly at bird right edge
        let (state, config) = state_at(100.0, vec![Obstacle::new(217.0, 400.0)]);
        assert!(!check(&state, &config));
    }

    #[test]
    fn test_gap_bounds() {
        let config = FlightConfig::default();
        let (top, bottom) = gap_bounds(&Obstacle::new(0.0, 300.0), &config);
        assert!((top - 200.0).abs() < f64::EPSILON);
        assert!((bottom - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_check_is_pure() {
        let (state, config) = state_at(202.0, vec![Obstacle::new(180.0, 300.0)]);
        let before = state.clone();
        let _ = check(&state, &config);
        assert_eq!(state, before);
    }
}
