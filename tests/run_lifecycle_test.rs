//! Integration test: run lifecycle
//!
//! Exercises RUNNING -> OVER -> new run through the session layer, and the
//! scoring rules over whole runs.

use flapwing::app::{App, AppInput, AppOptions};
use flapwing::sim::{tick, ControlMode, FrameInput};
use flapwing::{Difficulty, FlightConfig, GameState, Pilot, RunPhase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn level_track() -> FlightConfig {
    FlightConfig {
        gap_band_min: 300.0,
        gap_band_max: 300.0,
        ..FlightConfig::default()
    }
}

fn session_with(config: FlightConfig, auto_solve: bool) -> App {
    App::new(AppOptions {
        config,
        difficulty: Some(Difficulty::Apprentice),
        auto_solve,
        pilot: Pilot::Threshold,
        seed: 7,
    })
    .unwrap()
}

fn session(auto_solve: bool) -> App {
    session_with(FlightConfig::default(), auto_solve)
}

fn crash(app: &mut App) {
    app.process_input(AppInput::Jump);
    app.step_frames(600);
    assert_eq!(app.phase(), RunPhase::Over);
}

// =============================================================================
// Game over is terminal until a new run
// =============================================================================

#[test]
fn test_state_frozen_after_death() {
    let mut app = session(false);
    crash(&mut app);

    let frozen = app.state.clone();
    assert!(!app.tick(Duration::from_millis(100)));
    assert!(!app.step_frames(30));
    assert_eq!(app.state, frozen);
}

#[test]
fn test_tick_on_dead_state_is_noop() {
    let config = FlightConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    while state.alive {
        tick(&mut state, FrameInput::default(), ControlMode::Manual, &config, &mut rng);
    }

    let frozen = state.clone();
    for _ in 0..10 {
        let result = tick(
            &mut state,
            FrameInput { jump: true },
            ControlMode::AutoSolve(Pilot::GlidePath),
            &config,
            &mut rng,
        );
        assert!(!result.jumped);
    }
    assert_eq!(state, frozen);
}

#[test]
fn test_jump_after_crash_starts_next_seed() {
    let mut app = session(false);
    crash(&mut app);
    let first_seed = app.seed;

    app.process_input(AppInput::Jump);
    assert_eq!(app.phase(), RunPhase::Running);
    assert_eq!(app.seed, first_seed + 1);
    assert_eq!(app.state.score, 0);
    assert!(app.state.obstacles.is_empty());
    assert!(app.waiting_to_start);
}

#[test]
fn test_best_score_survives_restart() {
    let mut app = session_with(level_track(), true);
    app.step_frames(1_200);
    let best = app.best_score;
    assert!(best > 0);

    app.process_input(AppInput::Restart);
    assert_eq!(app.state.score, 0);
    assert_eq!(app.best_score, best);
}

// =============================================================================
// Auto-solve toggling
// =============================================================================

#[test]
fn test_toggle_starts_auto_run_immediately() {
    let mut app = session(false);
    app.process_input(AppInput::ToggleAutoSolve);
    assert!(app.auto_solve);
    assert!(!app.waiting_to_start);
    assert!(app.tick(Duration::from_millis(50)));
    assert!(app.state.frame > 0);
}

#[test]
fn test_jump_ignored_in_auto_mode() {
    let mut app = session(true);
    app.process_input(AppInput::Jump);
    assert!(!app.jump_queued);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_each_obstacle_scores_once() {
    let config = level_track();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mode = ControlMode::AutoSolve(Pilot::Threshold);

    let mut scored_total = 0;
    let mut spawned_total = 0;

    for _ in 0..2_400 {
        let result = tick(&mut state, FrameInput::default(), mode, &config, &mut rng);
        assert!(state.alive);
        // Spacing is wider than one frame of scroll: at most one pass per frame.
        assert!(result.scored <= 1);
        scored_total += result.scored;
        spawned_total += result.spawned;
    }

    assert_eq!(state.score, scored_total);
    assert!((state.score as usize) <= spawned_total);
    // Obstacles left of the bird stay scored until they despawn.
    for obstacle in &state.obstacles {
        assert_eq!(obstacle.scored, obstacle.x < state.bird.x);
    }
    assert!(state.score >= 10);
}

#[test]
fn test_obstacles_spaced_and_ordered() {
    let config = FlightConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for _ in 0..600 {
        tick(
            &mut state,
            FrameInput::default(),
            ControlMode::AutoSolve(Pilot::Threshold),
            &config,
            &mut rng,
        );
        for pair in state.obstacles.windows(2) {
            let spacing = pair[1].x - pair[0].x;
            assert!((spacing - config.obstacle_spacing).abs() < 1e-6);
        }
        for obstacle in &state.obstacles {
            assert!(obstacle.gap_center >= config.gap_band_min);
            assert!(obstacle.gap_center <= config.gap_band_max);
        }
        if !state.alive {
            break;
        }
    }
}
