//! Data-driven game balance
//!
//! Defaults come from `consts`; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// How pipe gap heights are derived from a slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GapStrategy {
    /// Memoized list, extended low to high from one seeded stream
    #[default]
    Sequential,
    /// Fresh generator seeded from the slot index on every query
    Hashed,
}

impl GapStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapStrategy::Sequential => "sequential",
            GapStrategy::Hashed => "hashed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Some(GapStrategy::Sequential),
            "hashed" | "hash" => Some(GapStrategy::Hashed),
            _ => None,
        }
    }
}

/// What happens when the player hits a pipe or leaves the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Freeze and report the score; wait for a restart input
    #[default]
    GameOver,
    /// Silently start over
    Reset,
}

/// Game balance and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub flap_impulse: f32,
    pub scroll_speed: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Horizontal distance between one pipe's right edge and the next pipe's left edge
    pub pipe_spacing: f32,
    pub opening_height: f32,
    pub gap_strategy: GapStrategy,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_offset: f32,
    pub start_position: f32,

    // === Rules ===
    pub collision_policy: CollisionPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,

            pipe_width: PIPE_WIDTH,
            pipe_spacing: PIPE_SPACING,
            opening_height: PIPE_OPENING_HEIGHT,
            gap_strategy: GapStrategy::Sequential,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_offset: PLAYER_OFFSET,
            start_position: PLAYER_START_POSITION,

            collision_policy: CollisionPolicy::GameOver,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> SimResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// World-space distance from one slot's left edge to the next
    #[inline]
    pub fn slot_stride(&self) -> f32 {
        self.pipe_width + self.pipe_spacing
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("pipe_width", self.pipe_width),
            ("opening_height", self.opening_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidTuning(format!("{name} must be positive, got {value}")));
            }
        }

        let finite = [
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("player_offset", self.player_offset),
            ("start_position", self.start_position),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidTuning(format!("{name} must be finite, got {value}")));
            }
        }

        if !(self.pipe_spacing.is_finite() && self.pipe_spacing >= 0.0) {
            return Err(SimError::InvalidTuning(format!(
                "pipe_spacing must be non-negative, got {}",
                self.pipe_spacing
            )));
        }
        // Distance only ever grows while running
        if !(self.scroll_speed.is_finite() && self.scroll_speed >= 0.0) {
            return Err(SimError::InvalidTuning(format!(
                "scroll_speed must be non-negative, got {}",
                self.scroll_speed
            )));
        }
        Ok(())
    }
}
