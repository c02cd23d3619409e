//! Target slots, one per step.

use serde::{Deserialize, Serialize};

use super::card::CardId;

/// Slot identifier: the step's position in authored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A drop target that accepts exactly the card whose step name matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub(crate) id: SlotId,
    pub(crate) accepts: String,
    pub(crate) filled: bool,
    pub(crate) occupant: Option<CardId>,
}

impl Slot {
    pub(crate) fn new(id: SlotId, accepts: String) -> Self {
        Self {
            id,
            accepts,
            filled: false,
            occupant: None,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    /// The step name this slot accepts. Shown as the slot's label.
    pub fn accepts(&self) -> &str {
        &self.accepts
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn occupant(&self) -> Option<CardId> {
        self.occupant
    }
}
