//! Recording feedback collaborators for testing.

use std::sync::{Arc, Mutex};

use crate::events::Cue;
use crate::traits::{Announcer, AudioSink};

/// Records every cue. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().unwrap().clone()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue) {
        self.played.lock().unwrap().push(cue);
    }
}

/// Records every announcement. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
