//! Collision detection against screen bounds and pipes
//!
//! Pipes are two rectangles per slot: the top one hangs from y = 0 down to the
//! gap height, the bottom one stands from the end of the opening to the floor.

use super::obstacles::slots_on_screen;
use super::rect::Rect;
use super::state::GameState;

/// What the player hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Player's top edge left the screen
    OutOfBounds,
    /// Player overlaps the pipe pair in this slot
    Pipe { slot: u32 },
}

/// Top and bottom pipe rectangles for a slot at screen x `left`
pub fn pipe_rects(left: f32, gap_height: f32, state: &GameState) -> (Rect, Rect) {
    let right = left + state.tuning.pipe_width;
    let top = Rect::new(left, 0.0, right, gap_height);
    let bottom = Rect::new(
        left,
        gap_height + state.tuning.opening_height,
        right,
        state.screen.height,
    );
    (top, bottom)
}

/// Find the first thing the player is colliding with, if any
pub fn detect_collision(state: &mut GameState) -> Option<Collision> {
    let y = state.player.y;
    if y > state.screen.height || y < 0.0 {
        return Some(Collision::OutOfBounds);
    }

    let player = state.player.rect();
    let window = slots_on_screen(
        state.distance_traveled,
        state.screen.width,
        state.tuning.slot_stride(),
    );
    for slot in window {
        let left = state.slot_left(slot);
        let gap = state.obstacles.height_at(slot);
        let (top, bottom) = pipe_rects(left, gap, state);
        if player.intersects(&top) || player.intersects(&bottom) {
            return Some(Collision::Pipe { slot });
        }
    }

    None
}

/// True if the player is out of bounds or touching a pipe
pub fn check_collision(state: &mut GameState) -> bool {
    detect_collision(state).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::with_defaults(11, 480.0, 800.0).unwrap()
    }

    /// Scroll so slot 0's left edge sits at screen x `left`
    fn place_slot_zero(state: &mut GameState, left: f32) {
        state.distance_traveled = -left;
    }

    #[test]
    fn test_below_screen() {
        let mut state = state();
        state.player.y = 801.0;
        assert_eq!(detect_collision(&mut state), Some(Collision::OutOfBounds));
    }

    #[test]
    fn test_above_screen() {
        let mut state = state();
        state.player.y = -0.5;
        assert!(check_collision(&mut state));
    }

    #[test]
    fn test_screen_edges_are_in_bounds() {
        let mut state = state();
        state.player.y = 0.0;
        assert!(!check_collision(&mut state));
    }

    #[test]
    fn test_no_pipes_at_start() {
        let mut state = state();
        assert!(!check_collision(&mut state));
    }

    #[test]
    fn test_inside_opening_is_safe() {
        let mut state = state();
        place_slot_zero(&mut state, 40.0);
        let gap = state.gap_height(0).unwrap();
        // Center the player inside the opening
        state.player.y = gap + (350.0 - 70.0) / 2.0;
        assert!(!check_collision(&mut state));
    }

    #[test]
    fn test_hits_top_pipe() {
        let mut state = state();
        place_slot_zero(&mut state, 40.0);
        let gap = state.gap_height(0).unwrap();
        // Top edge 1px above the gap
        state.player.y = gap - 1.0;
        if state.player.y >= 0.0 {
            assert_eq!(detect_collision(&mut state), Some(Collision::Pipe { slot: 0 }));
        }
    }

    #[test]
    fn test_hits_bottom_pipe() {
        let mut state = state();
        place_slot_zero(&mut state, 40.0);
        let gap = state.gap_height(0).unwrap();
        // Bottom edge 1px into the bottom pipe
        state.player.y = gap + 350.0 - 70.0 + 1.0;
        assert_eq!(detect_collision(&mut state), Some(Collision::Pipe { slot: 0 }));
    }

    #[test]
    fn test_touching_opening_edges_is_safe() {
        let mut state = state();
        place_slot_zero(&mut state, 40.0);
        let gap = state.gap_height(0).unwrap();
        state.player.y = gap;
        assert!(!check_collision(&mut state));
        state.player.y = gap + 350.0 - 70.0;
        assert!(!check_collision(&mut state));
    }

    #[test]
    fn test_pipe_beside_player_is_safe() {
        let mut state = state();
        // Pipe's left edge exactly at the player's right edge
        place_slot_zero(&mut state, 120.0);
        for y in [0.0, 200.0, 400.0, 730.0] {
            state.player.y = y;
            assert!(!check_collision(&mut state));
        }
    }

    #[test]
    fn test_pipe_rects() {
        let state = state();
        let (top, bottom) = pipe_rects(200.0, 100.0, &state);
        assert_eq!(top, Rect::new(200.0, 0.0, 300.0, 100.0));
        assert_eq!(bottom, Rect::new(200.0, 450.0, 300.0, 800.0));
    }
}
