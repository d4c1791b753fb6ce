//! Pipe passing and scoring

use super::state::GameState;

/// Move the pending-slot pointer past the next pipe if the player cleared it.
///
/// A pipe counts once its right edge is left of the player's left edge. At most
/// one pipe is counted per call. Returns true if the score went up.
pub fn advance_score(state: &mut GameState) -> bool {
    let pending = state.next_pending_slot;
    let right = state.slot_left(pending) + state.tuning.pipe_width;
    if right < state.player.offset_x {
        state.next_pending_slot += 1;
        log::debug!("Passed pipe {}, score {}", pending, state.next_pending_slot);
        true
    } else {
        false
    }
}
