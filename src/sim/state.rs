//! Game state and core simulation types
//!
//! Everything a run needs lives in one `GameState` value that the stage
//! functions (`integrate`, `advance_score`, `detect_collision`, `tick`) take
//! by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::{ObstacleCourse, slot_left};
use super::rect::Rect;
use crate::error::{SimError, SimResult};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Paused by the player
    Paused,
    /// Crashed; frozen until a restart
    GameOver,
}

/// Something the host should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A flap was applied (play the flap sound)
    Flapped,
    /// A pipe was passed
    Scored { score: u32 },
    /// The run ended; show the score and wait for a restart
    GameOver { score: u32 },
    /// The run ended and was reset immediately (reset collision policy)
    Crashed { score: u32 },
    /// A new run started after game over
    Restarted,
}

/// Screen dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check the screen can hold the pipe opening
    pub fn validate(&self, opening_height: f32) -> SimResult<()> {
        let ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > opening_height;
        if ok {
            Ok(())
        } else {
            Err(SimError::InvalidScreen {
                width: self.width,
                height: self.height,
                opening: opening_height,
            })
        }
    }
}

/// The player-controlled body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Screen-space y of the top edge
    pub y: f32,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub size: Vec2,
    /// Fixed screen-space x of the left edge
    pub offset_x: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            y: 0.0,
            vel_y: 0.0,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            offset_x: tuning.player_offset,
        }
    }

    /// Bounding box in screen space
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::new(self.offset_x, self.y), self.size)
    }

    /// Override vertical velocity with the flap impulse
    pub fn flap(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for the obstacle course
    pub seed: u64,
    pub tuning: Tuning,
    pub screen: ScreenSize,
    pub player: Player,
    /// World-space horizontal scroll offset
    pub distance_traveled: f32,
    /// Clock sample (seconds) of the previous frame; `None` skips integration once
    pub last_frame: Option<f64>,
    pub obstacles: ObstacleCourse,
    /// Index of the first slot not yet passed; also the score
    pub next_pending_slot: u32,
    pub phase: GamePhase,
    /// Best score this session (not persisted)
    pub best_score: u32,
    /// Completed runs this session
    pub runs: u32,
    /// Integrated frames in the current run
    pub frames: u64,
}

impl GameState {
    /// Create a running game with the given seed, screen size and tuning
    pub fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> SimResult<Self> {
        tuning.validate()?;
        let screen = ScreenSize::new(width, height);
        screen.validate(tuning.opening_height)?;

        let obstacles = ObstacleCourse::new(
            seed,
            tuning.gap_strategy,
            screen.height - tuning.opening_height,
        );
        let mut state = Self {
            seed,
            player: Player::new(&tuning),
            tuning,
            screen,
            distance_traveled: 0.0,
            last_frame: None,
            obstacles,
            next_pending_slot: 0,
            phase: GamePhase::Running,
            best_score: 0,
            runs: 0,
            frames: 0,
        };
        state.reset();
        Ok(state)
    }

    /// Create a game with default tuning
    pub fn with_defaults(seed: u64, width: f32, height: f32) -> SimResult<Self> {
        Self::new(seed, width, height, Tuning::default())
    }

    /// Put the player back at the start of a fresh course
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.player.y = self.screen.height / 2.0;
        self.player.vel_y = 0.0;
        self.distance_traveled = self.tuning.start_position;
        self.obstacles.clear();
        self.next_pending_slot = 0;
        self.frames = 0;
        log::info!(
            "Reset: screen {}x{}, start offset {}",
            self.screen.width,
            self.screen.height,
            self.distance_traveled
        );
    }

    /// Apply new screen dimensions; restarts the run
    pub fn resize(&mut self, width: f32, height: f32) -> SimResult<()> {
        let screen = ScreenSize::new(width, height);
        screen.validate(self.tuning.opening_height)?;
        self.screen = screen;
        self.obstacles
            .set_gap_range(screen.height - self.tuning.opening_height);
        self.reset();
        Ok(())
    }

    /// Score shown to the player
    #[inline]
    pub fn score(&self) -> u32 {
        self.next_pending_slot
    }

    /// Gap height for a slot; fails for negative indices
    pub fn gap_height(&mut self, index: i64) -> SimResult<f32> {
        self.obstacles.gap_height(index)
    }

    /// Screen-space x of a slot's left edge
    pub fn slot_left(&self, index: u32) -> f32 {
        slot_left(index, self.distance_traveled, self.tuning.slot_stride())
    }

    /// Record a clock sample and return the elapsed time since the last one.
    ///
    /// Returns `None` on the first sample after a reset or resume.
    pub fn frame_dt(&mut self, now: f64) -> Option<f32> {
        let dt = self.last_frame.map(|last| (now - last).max(0.0) as f32);
        self.last_frame = Some(now);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_reset() {
        let state = GameState::with_defaults(1, 480.0, 800.0).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.y, 400.0);
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.distance_traveled, -1000.0);
        assert_eq!(state.score(), 0);
        assert!(state.last_frame.is_none());
        assert_eq!(state.runs, 0);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = GameState::with_defaults(1, 480.0, 800.0).unwrap();
        state.player.y = 12.0;
        state.player.vel_y = 345.0;
        state.distance_traveled = 5000.0;
        state.next_pending_slot = 7;
        state.last_frame = Some(3.0);
        state.gap_height(4).unwrap();

        state.reset();

        assert_eq!(state.player.y, 400.0);
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.distance_traveled, -1000.0);
        assert_eq!(state.score(), 0);
        assert!(state.last_frame.is_none());
        assert_eq!(state.obstacles.generated(), 0);
    }

    #[test]
    fn test_invalid_screen() {
        let err = GameState::with_defaults(1, 480.0, 300.0).unwrap_err();
        assert!(matches!(err, SimError::InvalidScreen { .. }));
        let err = GameState::with_defaults(1, 0.0, 800.0).unwrap_err();
        assert!(matches!(err, SimError::InvalidScreen { .. }));
    }

    #[test]
    fn test_resize_resets() {
        let mut state = GameState::with_defaults(1, 480.0, 800.0).unwrap();
        state.distance_traveled = 900.0;
        state.resize(600.0, 1000.0).unwrap();
        assert_eq!(state.player.y, 500.0);
        assert_eq!(state.distance_traveled, -1000.0);
        assert_eq!(state.obstacles.gap_range(), 650.0);

        assert!(state.resize(600.0, 100.0).is_err());
        // Failed resize keeps the previous screen
        assert_eq!(state.screen.height, 1000.0);
    }

    #[test]
    fn test_frame_dt_skips_first_sample() {
        let mut state = GameState::with_defaults(1, 480.0, 800.0).unwrap();
        assert_eq!(state.frame_dt(10.0), None);
        let dt = state.frame_dt(10.25).unwrap();
        assert!((dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut state = GameState::with_defaults(1, 480.0, 800.0).unwrap();
        for prior in [-2000.0, 0.0, 1234.5] {
            state.player.vel_y = prior;
            state.player.flap(state.tuning.flap_impulse);
            assert_eq!(state.player.vel_y, -800.0);
        }
    }

    #[test]
    fn test_player_rect() {
        let state = GameState::with_defaults(1, 480.0, 800.0).unwrap();
        let rect = state.player.rect();
        assert_eq!(rect, Rect::new(20.0, 400.0, 120.0, 470.0));
    }
}
