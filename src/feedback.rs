//! Routes engine events to the audio and announcement collaborators.
//!
//! Muting silences audio cues only. Announcements and game state are never
//! affected by it.

use crate::events::EngineEvent;
use crate::traits::{Announcer, AudioSink};

pub struct Feedback {
    audio: Box<dyn AudioSink>,
    announcer: Box<dyn Announcer>,
    muted: bool,
}

impl Feedback {
    pub fn new(audio: Box<dyn AudioSink>, announcer: Box<dyn Announcer>) -> Self {
        Self {
            audio,
            announcer,
            muted: false,
        }
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip mute and return the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        tracing::debug!(muted = self.muted, "Mute toggled");
        self.muted
    }

    /// Play and announce whatever `events` call for, in order.
    pub fn deliver(&mut self, events: &[EngineEvent]) {
        for event in events {
            if let Some(cue) = event.cue() {
                if !self.muted {
                    self.audio.play(cue);
                }
            }
            if let Some(message) = event.announcement() {
                self.announcer.announce(message);
            }
        }
    }

    /// Announce a host-side message that has no engine event behind it.
    pub fn announce(&mut self, message: &str) {
        self.announcer.announce(message);
    }
}

impl std::fmt::Debug for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feedback").field("muted", &self.muted).finish()
    }
}
