//! Hit area registry for pointer interactions.
//!
//! The renderer registers the on-screen region of every card and slot while
//! drawing a frame; the engine and host then query the registry to learn
//! what lies under the pointer. Areas are cleared at the start of each
//! render cycle.

use crate::board::{CardId, SlotId};

use super::position::{Region, ScreenPosition};

/// What a region on screen represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card(CardId),
    Slot(SlotId),
}

#[derive(Debug, Clone, Copy)]
pub struct HitArea {
    pub region: Region,
    pub target: HitTarget,
}

/// Resolves what lies under a screen position.
pub trait HitTester {
    fn target_at(&self, pos: ScreenPosition) -> Option<HitTarget>;

    fn slot_at(&self, pos: ScreenPosition) -> Option<SlotId> {
        match self.target_at(pos) {
            Some(HitTarget::Slot(slot)) => Some(slot),
            _ => None,
        }
    }

    fn card_at(&self, pos: ScreenPosition) -> Option<CardId> {
        match self.target_at(pos) {
            Some(HitTarget::Card(card)) => Some(card),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct HitAreaRegistry {
    /// Registration order is z-order: later areas are on top.
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, region: Region, target: HitTarget) {
        self.areas.push(HitArea { region, target });
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Region most recently registered for `target`.
    pub fn region_of(&self, target: HitTarget) -> Option<Region> {
        self.areas
            .iter()
            .rev()
            .find(|a| a.target == target)
            .map(|a| a.region)
    }
}

impl HitTester for HitAreaRegistry {
    fn target_at(&self, pos: ScreenPosition) -> Option<HitTarget> {
        self.areas
            .iter()
            .rev()
            .find(|a| a.region.contains(pos))
            .map(|a| a.target)
    }
}
