//! Sound effect output
//!
//! The simulation only reports what happened; a host sink decides how to play
//! it. Sinks restart a clip from the beginning if it is already playing.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player flapped
    Flap,
    /// Pipe passed
    Score,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    /// Sound to play for a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Flapped => Some(SoundEffect::Flap),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::GameOver { .. } | GameEvent::Crashed { .. } => Some(SoundEffect::GameOver),
            GameEvent::Restarted => None,
        }
    }
}

/// Something that can play sound effects
pub trait AudioSink {
    /// Play `effect` from the start, cutting off the same effect if it is playing
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that discards everything
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that logs and remembers what was played (headless runs, tests)
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: Vec<SoundEffect>,
    pub muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times an effect was played
    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|e| **e == effect).count()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::trace!("play {:?}", effect);
        self.played.push(effect);
    }
}
