//! Drawable view of the game state
//!
//! Everything a renderer needs for one frame, detached from the simulation.

use serde::{Deserialize, Serialize};

use super::obstacles::{slot_left, slots_on_screen};
use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// One on-screen pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub slot: u32,
    /// Screen-space x of the left edge
    pub left: f32,
    pub gap_height: f32,
}

/// Render adapter input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Background covers the whole screen
    pub background: Rect,
    pub player: Rect,
    pub pipes: Vec<PipeView>,
    pub pipe_width: f32,
    pub opening_height: f32,
    pub score: u32,
    pub best_score: u32,
    pub phase: GamePhase,
}

impl RenderSnapshot {
    /// Top and bottom rectangles of a pipe pair
    pub fn pipe_rects(&self, pipe: &PipeView) -> (Rect, Rect) {
        let right = pipe.left + self.pipe_width;
        (
            Rect::new(pipe.left, 0.0, right, pipe.gap_height),
            Rect::new(
                pipe.left,
                pipe.gap_height + self.opening_height,
                right,
                self.background.bottom(),
            ),
        )
    }
}

/// Capture the current frame.
///
/// Takes `&mut` because drawing a slot for the first time generates its gap.
pub fn snapshot(state: &mut GameState) -> RenderSnapshot {
    let distance = state.distance_traveled;
    let stride = state.tuning.slot_stride();
    let obstacles = &mut state.obstacles;
    let pipes = slots_on_screen(distance, state.screen.width, stride)
        .map(|slot| PipeView {
            slot,
            left: slot_left(slot, distance, stride),
            gap_height: obstacles.height_at(slot),
        })
        .collect();

    RenderSnapshot {
        background: Rect::new(0.0, 0.0, state.screen.width, state.screen.height),
        player: state.player.rect(),
        pipes,
        pipe_width: state.tuning.pipe_width,
        opening_height: state.tuning.opening_height,
        score: state.score(),
        best_score: state.best_score,
        phase: state.phase,
    }
}
