//! Integration test: auto-solve pilots
//!
//! Drives full runs through the public game loop and checks that the pilots
//! keep the bird alive in worlds they can provably handle.

use flapwing::sim::{run_headless, tick, ControlMode, FrameInput};
use flapwing::{Collision, Difficulty, FlightConfig, GameState, Pilot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Every gap centred at mid-height: the steady flap cycle never leaves the gap.
fn level_track() -> FlightConfig {
    FlightConfig {
        gap_band_min: 300.0,
        gap_band_max: 300.0,
        ..FlightConfig::default()
    }
}

/// One minute at 60 fps.
const ONE_MINUTE: u64 = 3_600;

// =============================================================================
// Threshold pilot
// =============================================================================

#[test]
fn test_threshold_pilot_survives_level_track() {
    let config = level_track();
    let outcome = run_headless(&config, Pilot::Threshold, 1, ONE_MINUTE).unwrap();

    assert_eq!(outcome.death, None, "threshold pilot crashed: {:?}", outcome);
    assert_eq!(outcome.frames, ONE_MINUTE);
    // ~177s of scrolling minus the first obstacle's approach
    assert!(outcome.score >= 20, "score was {}", outcome.score);
}

#[test]
fn test_threshold_pilot_holds_altitude_without_obstacles() {
    let config = FlightConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // Obstacles need ~3 seconds to reach the bird; check the hover before that.
    for _ in 0..120 {
        tick(
            &mut state,
            FrameInput::default(),
            ControlMode::AutoSolve(Pilot::Threshold),
            &config,
            &mut rng,
        );
        assert!(state.alive);
        assert!(state.bird.y > 200.0 && state.bird.y < 400.0);
    }
}

// =============================================================================
// Glide-path pilot
// =============================================================================

#[test]
fn test_glide_path_pilot_survives_level_track() {
    let config = level_track();
    let outcome = run_headless(&config, Pilot::GlidePath, 2, ONE_MINUTE).unwrap();

    assert_eq!(outcome.death, None, "glide-path pilot crashed: {:?}", outcome);
    assert!(outcome.score >= 20, "score was {}", outcome.score);
}

// =============================================================================
// Every preset, randomized gaps
// =============================================================================

/// Assert `pilot` survives a minute on every preset for a spread of seeds.
fn assert_survives_all_presets(pilot: Pilot) {
    for difficulty in Difficulty::ALL {
        let config = FlightConfig::for_difficulty(difficulty);
        for seed in 0..12 {
            let outcome = run_headless(&config, pilot, seed, ONE_MINUTE).unwrap();
            assert_eq!(
                outcome.death,
                None,
                "{} pilot crashed on {} (seed {}, score {}, frame {})",
                pilot.name(),
                difficulty.name(),
                seed,
                outcome.score,
                outcome.frames
            );
        }
    }
}

#[test]
fn test_threshold_pilot_survives_every_preset() {
    assert_survives_all_presets(Pilot::Threshold);
}

#[test]
fn test_glide_path_pilot_survives_every_preset() {
    assert_survives_all_presets(Pilot::GlidePath);
}

// =============================================================================
// Manual mode baseline
// =============================================================================

#[test]
fn test_no_input_falls_to_the_floor() {
    let config = FlightConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    while state.alive {
        tick(
            &mut state,
            FrameInput::default(),
            ControlMode::Manual,
            &config,
            &mut rng,
        );
    }

    assert_eq!(state.death, Some(Collision::Floor));
    assert_eq!(state.score, 0);
    assert!(state.frame < 60);
}

#[test]
fn test_headless_runs_reproduce_per_seed() {
    let config = FlightConfig::default();
    for pilot in Pilot::ALL {
        let a = run_headless(&config, pilot, 1234, 10_000).unwrap();
        let b = run_headless(&config, pilot, 1234, 10_000).unwrap();
        assert_eq!(a, b);
    }
}
