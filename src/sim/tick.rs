//! Per-frame simulation tick
//!
//! Order within a frame: inputs, integration, scoring, collision, and finally
//! the phase transition a collision causes.

use super::autopilot::wants_flap;
use super::collision::{Collision, detect_collision};
use super::physics::integrate;
use super::score::advance_score;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::CollisionPolicy;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (tap/click/space)
    pub flap: bool,
    /// Start a new run after game over
    pub restart: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the autopilot flaps
    pub autopilot: bool,
}

/// Advance the game by one rendered frame.
///
/// `now` is a monotonic clock sample in seconds. The first frame after a reset
/// or resume only records the sample.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    apply_input(state, input, &mut events);

    if state.phase != GamePhase::Running {
        return events;
    }

    if let Some(dt) = state.frame_dt(now) {
        events.extend(step(state, dt));
    }
    events
}

/// Advance the simulation by `dt` seconds, ignoring inputs and the frame clock
pub fn step(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    integrate(state, dt);

    if advance_score(state) {
        events.push(GameEvent::Scored {
            score: state.score(),
        });
    }

    if let Some(hit) = detect_collision(state) {
        end_run(state, hit, &mut events);
    }
    events
}

fn apply_input(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.restart {
        events.extend(restart(state));
    }
    if input.pause {
        toggle_pause(state);
    }
    let autopilot = input.autopilot && state.phase == GamePhase::Running && wants_flap(state);
    if input.flap || autopilot {
        events.extend(flap(state));
    }
}

/// Apply a flap now. Ignored unless the game is running.
pub fn flap(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Running {
        return None;
    }
    state.player.flap(state.tuning.flap_impulse);
    log::debug!("Flap at y={:.1}", state.player.y);
    Some(GameEvent::Flapped)
}

/// Start a new run. Only valid after game over.
pub fn restart(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::GameOver {
        log::warn!("Restart ignored while {:?}", state.phase);
        return None;
    }
    state.reset();
    state.phase = GamePhase::Running;
    log::info!("Restarted (run {})", state.runs + 1);
    Some(GameEvent::Restarted)
}

/// Pause a running game or resume a paused one
pub fn toggle_pause(state: &mut GameState) {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            log::info!("Paused");
        }
        GamePhase::Paused => {
            // Don't integrate the time spent paused
            state.last_frame = None;
            state.phase = GamePhase::Running;
            log::info!("Resumed");
        }
        GamePhase::GameOver => {}
    }
}

fn end_run(state: &mut GameState, hit: Collision, events: &mut Vec<GameEvent>) {
    let score = state.score();
    state.best_score = state.best_score.max(score);
    state.runs += 1;

    match state.tuning.collision_policy {
        CollisionPolicy::GameOver => {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over: {:?} after {} frames, score {} (best {})",
                hit,
                state.frames,
                score,
                state.best_score
            );
            events.push(GameEvent::GameOver { score });
        }
        CollisionPolicy::Reset => {
            log::info!("Crashed: {:?}, score {}; resetting", hit, score);
            state.reset();
            events.push(GameEvent::Crashed { score });
        }
    }
}
