//! Board invariant violations.
//!
//! These only arise when a mutator is reached through the wrong route. The
//! placement validator checks every precondition before mutating, so in a
//! correct build none of these is ever constructed.

use thiserror::Error;

use crate::board::{CardId, SlotId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("card {0:?} does not exist on this board")]
    UnknownCard(CardId),

    #[error("slot {0:?} does not exist on this board")]
    UnknownSlot(SlotId),

    #[error("slot {slot:?} is already filled by card {occupant:?}")]
    SlotAlreadyFilled { slot: SlotId, occupant: CardId },

    #[error("card {card:?} already occupies slot {slot:?}")]
    CardAlreadyPlaced { card: CardId, slot: SlotId },

    #[error("card {0:?} is already locked")]
    CardAlreadyLocked(CardId),

    #[error("card {card:?} (`{card_name}`) does not belong in slot {slot:?} (`{accepts}`)")]
    NameMismatch {
        card: CardId,
        card_name: String,
        slot: SlotId,
        accepts: String,
    },
}

impl InvariantViolation {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            InvariantViolation::UnknownCard(_) => "INVARIANT_UNKNOWN_CARD",
            InvariantViolation::UnknownSlot(_) => "INVARIANT_UNKNOWN_SLOT",
            InvariantViolation::SlotAlreadyFilled { .. } => "INVARIANT_SLOT_FILLED",
            InvariantViolation::CardAlreadyPlaced { .. } => "INVARIANT_CARD_PLACED",
            InvariantViolation::CardAlreadyLocked(_) => "INVARIANT_CARD_LOCKED",
            InvariantViolation::NameMismatch { .. } => "INVARIANT_NAME_MISMATCH",
        }
    }
}
