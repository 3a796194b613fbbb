//! Flight configuration: world geometry, physics constants and difficulty presets.
//!
//! All values are in world units and seconds. The vertical axis points down:
//! row 0 is the ceiling and `world_height` is the floor.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Rejected configuration. Produced once at construction, never per frame.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("jump_impulse must be negative (upward), got {0}")]
    ImpulseNotUpward(f64),

    #[error("gap_band_min ({min}) exceeds gap_band_max ({max})")]
    InvertedGapBand { min: f64, max: f64 },

    #[error("gap band [{min}, {max}] must lie within [{lo}, {hi}] so the gap stays inside the world")]
    GapBandOutOfWorld { min: f64, max: f64, lo: f64, hi: f64 },

    #[error("obstacle_spacing {spacing} must exceed {min} (obstacle + bird width) and not exceed world_width {max}")]
    SpacingOutOfRange { spacing: f64, min: f64, max: f64 },

    #[error("despawn_x {despawn_x} must keep obstacles until they are fully behind the bird (<= {limit})")]
    DespawnAheadOfBird { despawn_x: f64, limit: f64 },

    #[error("{field} {value} is outside the world (0..{limit})")]
    OutsideWorld {
        field: &'static str,
        value: f64,
        limit: f64,
    },

    #[error("unknown difficulty '{0}' (expected novice, apprentice, journeyman or master)")]
    UnknownDifficulty(String),

    #[error("unknown pilot '{0}' (expected threshold or glide-path)")]
    UnknownPilot(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Novice,
    #[default]
    Apprentice,
    Journeyman,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Novice,
        Difficulty::Apprentice,
        Difficulty::Journeyman,
        Difficulty::Master,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Novice)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Apprentice => "Apprentice",
            Self::Journeyman => "Journeyman",
            Self::Master => "Master",
        }
    }

    /// Vertical opening between barriers.
    pub fn gap_height(&self) -> f64 {
        match self {
            Self::Novice => 220.0,
            Self::Apprentice => 200.0,
            Self::Journeyman => 185.0,
            Self::Master => 170.0,
        }
    }

    /// Obstacle scroll speed in units/second.
    pub fn scroll_speed(&self) -> f64 {
        match self {
            Self::Novice => 150.0,
            Self::Apprentice => 180.0,
            Self::Journeyman => 200.0,
            Self::Master => 220.0,
        }
    }

    /// Horizontal distance between consecutive obstacles.
    pub fn obstacle_spacing(&self) -> f64 {
        match self {
            Self::Novice => 320.0,
            Self::Apprentice => 300.0,
            Self::Journeyman => 290.0,
            Self::Master => 280.0,
        }
    }

    /// How far a gap may drift from the previous one.
    pub fn max_gap_shift(&self) -> f64 {
        match self {
            Self::Novice => 100.0,
            Self::Apprentice => 120.0,
            Self::Journeyman => 140.0,
            Self::Master => 160.0,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// Tunable world and physics parameters for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub world_width: f64,
    pub world_height: f64,

    // Bird
    /// Fixed horizontal position of the bird's centre.
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub start_y: f64,
    pub start_velocity: f64,

    // Physics
    /// Downward acceleration (units/second^2).
    pub gravity: f64,
    /// Velocity set on jump. Negative = upward.
    pub jump_impulse: f64,
    /// Cap on downward velocity. `None` = uncapped.
    pub max_fall_speed: Option<f64>,

    // Track
    pub scroll_speed: f64,
    pub obstacle_spacing: f64,
    pub obstacle_width: f64,
    pub gap_height: f64,
    /// Safe band for gap centres.
    pub gap_band_min: f64,
    pub gap_band_max: f64,
    /// Maximum change of gap centre between neighbours. `None` = independent draws.
    pub max_gap_shift: Option<f64>,
    /// Mirror a gap step that would leave the band back toward its middle,
    /// instead of narrowing the draw at the band edge. Keeps runs of gaps
    /// from hugging an edge.
    pub recenter_gaps: bool,
    /// Obstacles whose left edge falls below this are removed.
    pub despawn_x: f64,

    // Autopilot
    pub autopilot_margin: f64,

    /// Fixed simulation step in seconds.
    pub frame_dt: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        let difficulty = Difficulty::Apprentice;
        Self {
            world_width: 800.0,
            world_height: 600.0,

            bird_x: 200.0,
            bird_width: 34.0,
            bird_height: 24.0,
            start_y: 300.0,
            start_velocity: 0.0,

            gravity: 1400.0,
            jump_impulse: -420.0,
            max_fall_speed: None,

            scroll_speed: difficulty.scroll_speed(),
            obstacle_spacing: difficulty.obstacle_spacing(),
            obstacle_width: 80.0,
            gap_height: difficulty.gap_height(),
            gap_band_min: 150.0,
            gap_band_max: 450.0,
            max_gap_shift: Some(difficulty.max_gap_shift()),
            recenter_gaps: true,
            despawn_x: -80.0,

            autopilot_margin: -25.0,

            frame_dt: 1.0 / 60.0,
        }
    }
}

impl FlightConfig {
    /// Preset for the given difficulty.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            scroll_speed: difficulty.scroll_speed(),
            obstacle_spacing: difficulty.obstacle_spacing(),
            gap_height: difficulty.gap_height(),
            max_gap_shift: Some(difficulty.max_gap_shift()),
            ..Self::default()
        }
    }

    /// Load a JSON file on top of the defaults and validate the result.
    ///
    /// Missing fields keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run correctly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("bird_width", self.bird_width)?;
        positive("bird_height", self.bird_height)?;
        positive("gravity", self.gravity)?;
        positive("scroll_speed", self.scroll_speed)?;
        positive("obstacle_spacing", self.obstacle_spacing)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("gap_height", self.gap_height)?;
        positive("frame_dt", self.frame_dt)?;

        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::ImpulseNotUpward(self.jump_impulse));
        }
        if let Some(max_fall) = self.max_fall_speed {
            non_negative("max_fall_speed", max_fall)?;
        }
        if let Some(shift) = self.max_gap_shift {
            non_negative("max_gap_shift", shift)?;
        }

        inside_world("bird_x", self.bird_x, self.world_width)?;
        inside_world("start_y", self.start_y, self.world_height)?;

        if self.gap_band_min > self.gap_band_max {
            return Err(ConfigError::InvertedGapBand {
                min: self.gap_band_min,
                max: self.gap_band_max,
            });
        }
        let lo = self.gap_height / 2.0;
        let hi = self.world_height - self.gap_height / 2.0;
        if self.gap_band_min < lo || self.gap_band_max > hi {
            return Err(ConfigError::GapBandOutOfWorld {
                min: self.gap_band_min,
                max: self.gap_band_max,
                lo,
                hi,
            });
        }

        // Two obstacles must never overlap the bird at the same time.
        let min_spacing = self.obstacle_width + self.bird_width;
        if self.obstacle_spacing <= min_spacing || self.obstacle_spacing > self.world_width {
            return Err(ConfigError::SpacingOutOfRange {
                spacing: self.obstacle_spacing,
                min: min_spacing,
                max: self.world_width,
            });
        }

        let limit = self.bird_x - self.bird_width / 2.0 - self.obstacle_width;
        if self.despawn_x > limit {
            return Err(ConfigError::DespawnAheadOfBird {
                despawn_x: self.despawn_x,
                limit,
            });
        }

        Ok(())
    }

    /// Left-edge position below which the rightmost obstacle triggers a spawn.
    pub fn spawn_threshold(&self) -> f64 {
        self.world_width - self.obstacle_spacing
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // Written as a negated comparison so NaN is rejected too.
    if !(value > 0.0) {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value >= 0.0) {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn inside_world(field: &'static str, value: f64, limit: f64) -> Result<(), ConfigError> {
    if !(value > 0.0 && value < limit) {
        return Err(ConfigError::OutsideWorld {
            field,
            value,
            limit,
        });
    }
    Ok(())
}
