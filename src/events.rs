//! Engine input and output events.
//!
//! Every way a player can act (pointer drag, touch-style drag, click or
//! keyboard selection) is translated by the host into an [`InputEvent`].
//! The engine answers each input with zero or more [`EngineEvent`]s, which
//! the host forwards to the audio and announcement collaborators and uses to
//! drive transient visuals.

use serde::Serialize;

use crate::board::{CardId, SlotId};
use crate::gesture::ScreenPosition;
use crate::placement::{Outcome, RejectReason};
use crate::session::SessionSummary;

/// Announcement for a correct placement.
pub const MSG_CORRECT: &str = "Correct!";
/// Announcement for a mismatched placement.
pub const MSG_TRY_AGAIN: &str = "Try again.";
/// Announcement when a card is armed for placement.
pub const MSG_SELECTED: &str = "Description selected. Choose a target.";
/// Announcement when the armed card is toggled off.
pub const MSG_SELECTION_CANCELLED: &str = "Selection cancelled";
/// Announcement for a drag released away from any target.
pub const MSG_DROP_ON_TARGET: &str = "Drop on a target.";
/// Announcement when every slot is filled.
pub const MSG_FINISHED: &str = "All steps matched!";

/// Audio cue kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cue {
    Success,
    Failure,
}

/// A player action, independent of the input device that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Begin a session (from the start screen).
    StartSession,
    /// Rebuild the board with a new shuffle and start again.
    ResetSession,
    /// Pointer pressed on a card and began moving.
    PointerDragStart {
        card: CardId,
        position: ScreenPosition,
    },
    /// Pointer moved while a drag is in progress.
    PointerDragMove { position: ScreenPosition },
    /// Pointer released; terminates the drag.
    PointerDragEnd { position: ScreenPosition },
    /// Host-resolved drop (the host did its own hit-testing).
    DropOnSlot { card: CardId, slot: SlotId },
    /// Click or Enter/Space on a card.
    SelectToggle { card: CardId },
    /// Click or Enter/Space on a slot.
    SlotActivate { slot: SlotId },
}

/// What the engine did in response to an input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    SessionStarted {
        generation: u64,
        total: usize,
    },
    SessionFinished(SessionSummary),
    SelectionMade {
        card: CardId,
    },
    SelectionCancelled {
        card: CardId,
    },
    DragStarted {
        card: CardId,
    },
    /// The card under a new drag is locked; nothing started.
    DragRefused {
        card: CardId,
    },
    /// The slot highlighted under the drag changed.
    HoverChanged {
        slot: Option<SlotId>,
    },
    /// A drag ended with no eligible slot under the pointer.
    DropOutside {
        card: CardId,
    },
    Placement {
        card: CardId,
        slot: SlotId,
        outcome: Outcome,
    },
}

impl EngineEvent {
    /// The audio cue this event calls for, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            EngineEvent::Placement { outcome, .. } => Some(match outcome {
                Outcome::Correct => Cue::Success,
                Outcome::Incorrect | Outcome::Rejected(_) => Cue::Failure,
            }),
            EngineEvent::DropOutside { .. } | EngineEvent::DragRefused { .. } => {
                Some(Cue::Failure)
            }
            _ => None,
        }
    }

    /// The status message this event calls for, if any.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            EngineEvent::Placement { outcome, .. } => match outcome {
                Outcome::Correct => Some(MSG_CORRECT),
                Outcome::Incorrect => Some(MSG_TRY_AGAIN),
                Outcome::Rejected(_) => None,
            },
            EngineEvent::SelectionMade { .. } => Some(MSG_SELECTED),
            EngineEvent::SelectionCancelled { .. } => Some(MSG_SELECTION_CANCELLED),
            EngineEvent::DropOutside { .. } => Some(MSG_DROP_ON_TARGET),
            EngineEvent::SessionFinished(_) => Some(MSG_FINISHED),
            _ => None,
        }
    }

    /// The placement outcome carried by this event, if it is a placement.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            EngineEvent::Placement { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    pub fn is_rejection_because(&self, reason: RejectReason) -> bool {
        matches!(self, EngineEvent::Placement { outcome: Outcome::Rejected(r), .. } if *r == reason)
    }
}
