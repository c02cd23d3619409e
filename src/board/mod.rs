//! Card pool and slot set.
//!
//! The [`Board`] holds one [`Card`] and one [`Slot`] per step. Slots keep the
//! authored step order; cards are uniformly shuffled so their position never
//! gives the pairing away.
//!
//! Only the placement validator mutates cards and slots after a build. The
//! two mutators ([`Board::fill_slot`], [`Board::lock_card`]) refuse any
//! change that would break the pairing invariants:
//!
//! - a slot holds at most one card and a card sits in at most one slot;
//! - a slot is filled exactly when its occupant's step name matches;
//! - a filled slot never empties and a locked card never unlocks, short of a
//!   full rebuild.

pub mod card;
pub mod slot;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::Step;
use crate::error::InvariantViolation;

pub use card::{Card, CardId};
pub use slot::{Slot, SlotId};

#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Pool order (shuffled).
    cards: Vec<Card>,
    /// Step order.
    slots: Vec<Slot>,
    next_card_id: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all cards and slots with a fresh, shuffled layout for `steps`.
    pub fn build<R: Rng + ?Sized>(&mut self, steps: &[Step], rng: &mut R) {
        self.slots = steps
            .iter()
            .enumerate()
            .map(|(index, step)| Slot::new(SlotId(index), step.name.clone()))
            .collect();

        let mut cards: Vec<Card> = steps
            .iter()
            .map(|step| {
                let id = CardId(self.next_card_id);
                self.next_card_id += 1;
                Card::new(id, step.name.clone(), step.description.clone())
            })
            .collect();
        cards.shuffle(rng);
        self.cards = cards;

        tracing::debug!(cards = self.cards.len(), "Board built");
    }

    /// Cards in pool (presentation) order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Slots in step order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.filled).count()
    }

    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a slot by the step name it accepts.
    pub fn find_slot(&self, accepts: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.accepts == accepts)
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.0)
    }

    /// The slot `card` currently occupies, if any.
    pub fn slot_of(&self, card: CardId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.occupant == Some(card))
    }

    /// Put `card` into `slot`, marking the slot filled and the card placed.
    pub fn fill_slot(&mut self, slot: SlotId, card: CardId) -> Result<(), InvariantViolation> {
        if let Some(existing) = self.slot_of(card) {
            return Err(InvariantViolation::CardAlreadyPlaced {
                card,
                slot: existing.id,
            });
        }

        let card_index = self
            .cards
            .iter()
            .position(|c| c.id == card)
            .ok_or(InvariantViolation::UnknownCard(card))?;
        let target = self
            .slots
            .get_mut(slot.0)
            .ok_or(InvariantViolation::UnknownSlot(slot))?;

        if let Some(occupant) = target.occupant {
            return Err(InvariantViolation::SlotAlreadyFilled { slot, occupant });
        }
        let placed = &mut self.cards[card_index];
        if placed.step_name != target.accepts {
            return Err(InvariantViolation::NameMismatch {
                card,
                card_name: placed.step_name.clone(),
                slot,
                accepts: target.accepts.clone(),
            });
        }

        target.occupant = Some(card);
        target.filled = true;
        placed.placed = true;
        Ok(())
    }

    /// Lock `card` so it can never be selected or placed again.
    pub fn lock_card(&mut self, card: CardId) -> Result<(), InvariantViolation> {
        let target = self
            .cards
            .iter_mut()
            .find(|c| c.id == card)
            .ok_or(InvariantViolation::UnknownCard(card))?;
        if target.locked {
            return Err(InvariantViolation::CardAlreadyLocked(card));
        }
        target.locked = true;
        Ok(())
    }
}
