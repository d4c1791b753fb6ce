//! Idle/demo mode controller
//!
//! Keeps the player near the bottom of the next opening and flaps whenever it
//! starts falling below that line.

use super::state::GameState;

/// Distance above the bottom pipe where a falling player flaps (pixels)
const FLAP_MARGIN: f32 = 60.0;
/// Never flap this close to the top of the screen
const CEILING_MARGIN: f32 = 20.0;

/// Decide whether to flap this frame
pub fn wants_flap(state: &mut GameState) -> bool {
    let player = &state.player;
    if player.vel_y < 0.0 || player.y < CEILING_MARGIN {
        return false;
    }
    let bottom = player.y + player.size.y;

    let gap = state.obstacles.height_at(state.next_pending_slot);
    let opening_bottom = gap + state.tuning.opening_height;
    bottom > opening_bottom - FLAP_MARGIN
}
