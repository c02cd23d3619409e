//! Trait abstractions for the engine's external collaborators.
//!
//! # Traits
//!
//! - [`ContentSource`] - Where the puzzle document comes from
//! - [`AudioSink`] - Success/failure cue playback
//! - [`Announcer`] - Short human-readable status messages

pub mod content;
pub mod feedback;

pub use content::ContentSource;
pub use feedback::{Announcer, AudioSink};
