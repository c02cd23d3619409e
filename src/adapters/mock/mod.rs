//! Mock implementations for testing.
//!
//! These doubles record what they receive so tests can assert on
//! collaborator traffic without a terminal or a file system.

pub mod content;
pub mod feedback;

pub use content::InMemoryContent;
pub use feedback::{RecordingAnnouncer, RecordingAudio};
