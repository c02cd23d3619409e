//! Placement validation.
//!
//! [`PlacementValidator::attempt_place`] is the single entry point every
//! input path funnels into. Each call is one decision:
//!
//! 1. Unknown card, unknown or filled slot, locked card, or no running
//!    session: `Rejected`, nothing changes.
//! 2. Names match: fill the slot, lock the card, score +1, remaining -1,
//!    disarm the selection, and finish the session when nothing remains.
//! 3. Names differ: `Incorrect`, nothing changes. The caller decides what
//!    happens to the selection.

use serde::Serialize;

use crate::board::{Board, CardId, SlotId};
use crate::error::InvariantViolation;
use crate::events::EngineEvent;
use crate::selection::SelectionController;
use crate::session::SessionController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    UnknownCard,
    UnknownSlot,
    SlotFilled,
    CardLocked,
    SessionNotRunning,
}

/// Borrowed view over the state a placement may touch.
pub struct PlacementValidator<'a> {
    pub board: &'a mut Board,
    pub selection: &'a mut SelectionController,
    pub session: &'a mut SessionController,
}

impl PlacementValidator<'_> {
    /// Decide one placement of `card` into `slot`, pushing the resulting
    /// events onto `events`.
    ///
    /// An `Err` means a board invariant would have been broken, which the
    /// checks above make unreachable.
    pub fn attempt_place(
        &mut self,
        card: CardId,
        slot: SlotId,
        events: &mut Vec<EngineEvent>,
    ) -> Result<Outcome, InvariantViolation> {
        let outcome = match self.precheck(card, slot) {
            Err(reason) => Outcome::Rejected(reason),
            Ok(true) => {
                self.board.fill_slot(slot, card)?;
                self.board.lock_card(card)?;
                self.session.record_correct();
                self.selection.clear();
                Outcome::Correct
            }
            Ok(false) => Outcome::Incorrect,
        };

        tracing::debug!(?card, ?slot, ?outcome, "Placement attempt");
        events.push(EngineEvent::Placement {
            card,
            slot,
            outcome,
        });

        if outcome == Outcome::Correct && self.session.remaining() == 0 {
            if let Some(summary) = self.session.finish() {
                events.push(EngineEvent::SessionFinished(summary));
            }
        }
        Ok(outcome)
    }

    /// `Ok(matches)` when the attempt may proceed, `Err` when it is rejected.
    fn precheck(&self, card: CardId, slot: SlotId) -> Result<bool, RejectReason> {
        if !self.session.is_running() {
            return Err(RejectReason::SessionNotRunning);
        }
        let card = self.board.find_card(card).ok_or(RejectReason::UnknownCard)?;
        let slot = self.board.slot(slot).ok_or(RejectReason::UnknownSlot)?;
        if slot.is_filled() {
            return Err(RejectReason::SlotFilled);
        }
        if card.is_locked() {
            return Err(RejectReason::CardLocked);
        }
        Ok(card.step_name() == slot.accepts())
    }
}
