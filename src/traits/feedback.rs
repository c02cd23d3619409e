//! Feedback collaborator traits.
//!
//! Both collaborators are advisory. The engine never waits on them and
//! nothing they do feeds back into game state.

use crate::events::Cue;

/// Plays a success or failure cue.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Receives short status strings ("Correct!", "Try again.", ...).
pub trait Announcer {
    fn announce(&mut self, message: &str);
}
