//! Placeable description cards.

use serde::{Deserialize, Serialize};

/// Opaque card identifier.
///
/// Ids are handed out by the board and never reused within it, so an id
/// held across a reset no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// The draggable/selectable form of one step's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub(crate) id: CardId,
    pub(crate) step_name: String,
    pub(crate) description: String,
    pub(crate) placed: bool,
    pub(crate) locked: bool,
}

impl Card {
    pub(crate) fn new(id: CardId, step_name: String, description: String) -> Self {
        Self {
            id,
            step_name,
            description,
            placed: false,
            locked: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// The matching key. Never shown to the player.
    pub fn step_name(&self) -> &str {
        &self.step_name
    }

    /// The text the player sees.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Locked cards can no longer be selected, dragged or placed.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
