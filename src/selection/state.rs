//! Selection state machine: `Idle` or `Armed(card)`.

use serde::Serialize;

use crate::board::{Board, CardId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SelectionState {
    #[default]
    Idle,
    Armed(CardId),
}

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// `card` is now armed (any previously armed card was disarmed).
    Made(CardId),
    /// `card` was armed and is now disarmed; nothing is armed.
    Cancelled(CardId),
    /// The card is locked or unknown; nothing changed.
    Ignored,
}

#[derive(Debug, Default, Clone)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn armed(&self) -> Option<CardId> {
        match self.state {
            SelectionState::Armed(card) => Some(card),
            SelectionState::Idle => None,
        }
    }

    pub fn is_armed(&self, card: CardId) -> bool {
        self.state == SelectionState::Armed(card)
    }

    /// Arm `card`, or disarm it if it is the armed card.
    ///
    /// Locked cards are excluded from selection entirely.
    pub fn toggle(&mut self, card: CardId, board: &Board) -> SelectionChange {
        if self.is_armed(card) {
            self.state = SelectionState::Idle;
            return SelectionChange::Cancelled(card);
        }

        match board.find_card(card) {
            Some(found) if !found.is_locked() => {
                self.state = SelectionState::Armed(card);
                SelectionChange::Made(card)
            }
            _ => SelectionChange::Ignored,
        }
    }

    /// Arm `card` unconditionally. Used when a drag starts; the drag
    /// controller has already refused locked cards.
    pub(crate) fn arm(&mut self, card: CardId) {
        self.state = SelectionState::Armed(card);
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
    }
}
