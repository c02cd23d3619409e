//! Type definitions for the host state.
//!
//! - [`Screen`] - Which screen is displayed
//! - [`Focus`] - Which column keyboard navigation moves in
//! - [`PendingPress`] - A mouse press not yet classified as click or drag
//! - [`Pulse`] - The transient "incorrect" highlight on a card

use std::time::Instant;

use crate::board::CardId;
use crate::gesture::{HitTarget, ScreenPosition};
use crate::session::SessionStatus;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Game,
    End,
}

impl From<SessionStatus> for Screen {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::NotStarted => Screen::Start,
            SessionStatus::Running => Screen::Game,
            SessionStatus::Finished => Screen::End,
        }
    }
}

/// Keyboard focus column on the game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Description cards
    #[default]
    Pool,
    /// Step slots
    Targets,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Pool => Focus::Targets,
            Focus::Targets => Focus::Pool,
        }
    }
}

/// Left button went down here; a drag starts on the first movement,
/// otherwise the release is a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPress {
    pub at: ScreenPosition,
    pub target: Option<HitTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub card: CardId,
    pub until: Instant,
}
