//! Concrete implementations of the collaborator traits.
//!
//! # Adapters
//!
//! - [`FileContentSource`] - Reads the puzzle document from disk
//! - [`TerminalBell`] - Plays cues with the terminal bell
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryContent`] - Serves a fixed document (or a failure)
//! - [`mock::RecordingAudio`] - Records every cue played
//! - [`mock::RecordingAnnouncer`] - Records every announcement

pub mod file_content;
pub mod mock;
pub mod terminal_bell;

pub use file_content::FileContentSource;
pub use mock::{InMemoryContent, RecordingAnnouncer, RecordingAudio};
pub use terminal_bell::TerminalBell;
