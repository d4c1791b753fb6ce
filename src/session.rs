//! Host-side game session
//!
//! Owns a `GameState`, turns host callbacks (tap, dialog button, resize,
//! frame) into simulation calls and routes the resulting events to audio and
//! the game over dialog.

use crate::audio::{AudioSink, SoundEffect};
use crate::error::SimResult;
use crate::renderer::{Vertex, frame_vertices};
use crate::sim::{self, GameEvent, GameState, RenderSnapshot, TickInput};

/// Game instance holding all state
pub struct Session<A: AudioSink> {
    pub state: GameState,
    audio: A,
    autopilot: bool,
    /// Score waiting to be shown in the game over dialog
    pending_game_over: Option<u32>,
}

impl<A: AudioSink> Session<A> {
    pub fn new(state: GameState, audio: A) -> Self {
        Self {
            state,
            audio,
            autopilot: false,
            pending_game_over: None,
        }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
        log::info!("Autopilot: {}", on);
    }

    /// Tap/click: flap immediately and play the flap sound
    pub fn press(&mut self) {
        if let Some(event) = sim::flap(&mut self.state) {
            self.dispatch(event);
        }
    }

    pub fn toggle_pause(&mut self) {
        sim::toggle_pause(&mut self.state);
    }

    /// "Play again" from the game over dialog
    pub fn restart(&mut self) {
        if let Some(event) = sim::restart(&mut self.state) {
            self.pending_game_over = None;
            self.dispatch(event);
        }
    }

    /// Screen size changed; restarts the run
    pub fn resize(&mut self, width: f32, height: f32) -> SimResult<()> {
        self.state.resize(width, height)
    }

    /// Run one frame at clock sample `now` (seconds)
    pub fn frame(&mut self, now: f64) -> Vec<GameEvent> {
        let input = TickInput {
            autopilot: self.autopilot,
            ..Default::default()
        };
        let events = sim::tick(&mut self.state, &input, now);
        for event in &events {
            self.dispatch(*event);
        }
        events
    }

    /// Score for the game over dialog, once per game over
    pub fn take_game_over(&mut self) -> Option<u32> {
        self.pending_game_over.take()
    }

    pub fn snapshot(&mut self) -> RenderSnapshot {
        sim::snapshot(&mut self.state)
    }

    pub fn vertices(&mut self) -> Vec<Vertex> {
        frame_vertices(&self.snapshot())
    }

    fn dispatch(&mut self, event: GameEvent) {
        if let Some(effect) = SoundEffect::for_event(&event) {
            self.audio.play(effect);
        }
        if let GameEvent::GameOver { score } = event {
            self.pending_game_over = Some(score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogAudio;
    use crate::sim::GamePhase;

    fn session() -> Session<LogAudio> {
        let state = GameState::with_defaults(77, 480.0, 800.0).unwrap();
        Session::new(state, LogAudio::new())
    }

    #[test]
    fn test_press_plays_flap_each_time() {
        let mut session = session();
        session.press();
        session.press();
        assert_eq!(session.audio().count(SoundEffect::Flap), 2);
        assert_eq!(session.state.player.vel_y, -800.0);
    }

    #[test]
    fn test_game_over_dialog_and_restart() {
        let mut session = session();
        session.frame(0.0);
        // Fall out of the screen without flapping
        let mut now = 0.0;
        while session.state.phase == GamePhase::Running && now < 10.0 {
            now += 1.0 / 60.0;
            session.frame(now);
        }
        assert_eq!(session.state.phase, GamePhase::GameOver);
        assert_eq!(session.take_game_over(), Some(0));
        assert_eq!(session.take_game_over(), None);
        assert_eq!(session.audio().count(SoundEffect::GameOver), 1);

        // Taps do nothing until the dialog is answered
        session.press();
        assert_eq!(session.audio().count(SoundEffect::Flap), 0);

        session.restart();
        assert_eq!(session.state.phase, GamePhase::Running);
        assert_eq!(session.state.player.y, 400.0);
        assert_eq!(session.state.score(), 0);
    }

    #[test]
    fn test_vertices_follow_snapshot() {
        let mut session = session();
        let vertices = session.vertices();
        assert_eq!(vertices.len(), 12);
    }

    #[test]
    fn test_resize_rejects_tiny_screen() {
        let mut session = session();
        assert!(session.resize(480.0, 200.0).is_err());
        assert!(session.resize(720.0, 1280.0).is_ok());
        assert_eq!(session.state.player.y, 640.0);
    }
}
