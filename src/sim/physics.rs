//! Player and world integration

use super::state::GameState;

/// Advance player and scroll offset by `dt` seconds.
///
/// Position moves with the velocity from before this step; gravity is applied
/// afterwards.
pub fn integrate(state: &mut GameState, dt: f32) {
    let tuning = &state.tuning;
    state.player.y += dt * state.player.vel_y;
    state.player.vel_y += dt * tuning.gravity;
    state.distance_traveled += dt * tuning.scroll_speed;
    state.frames += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::with_defaults(5, 480.0, 800.0).unwrap()
    }

    #[test]
    fn test_gravity_after_position() {
        let mut state = state();
        state.player.vel_y = 0.0;
        integrate(&mut state, 1.0);
        assert_eq!(state.player.vel_y, 2000.0);
        assert_eq!(state.player.y, 400.0);
    }

    #[test]
    fn test_flap_step() {
        let mut state = state();
        state.player.vel_y = -800.0;
        integrate(&mut state, 0.1);
        assert!((state.player.y - 320.0).abs() < 0.001);
        assert!((state.player.vel_y - (-600.0)).abs() < 0.001);
    }

    #[test]
    fn test_scroll() {
        let mut state = state();
        let start = state.distance_traveled;
        integrate(&mut state, 0.5);
        assert!((state.distance_traveled - (start + 100.0)).abs() < 0.001);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut state = state();
        state.player.vel_y = 300.0;
        integrate(&mut state, 0.0);
        assert_eq!(state.player.y, 400.0);
        assert_eq!(state.player.vel_y, 300.0);
        assert_eq!(state.distance_traveled, -1000.0);
    }
}
