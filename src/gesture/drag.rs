//! Continuous drag tracking.
//!
//! A drag moves through `Idle -> Dragging -> Idle`. While dragging, the
//! controller keeps a proxy position (where the renderer draws the floating
//! copy of the card) and the slot currently highlighted under the pointer.
//! A filled slot is never highlighted, so releasing over one counts as a
//! drop outside any target.
//!
//! Only one drag exists at a time: a second `start` while dragging is
//! refused and the first drag carries on.

use serde::Serialize;

use crate::board::{Board, CardId, SlotId};

use super::hit_area::HitTester;
use super::position::{GrabOffset, ScreenPosition};

/// Ephemeral per-drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GestureState {
    pub card: CardId,
    /// Top-left of the floating proxy.
    pub proxy: ScreenPosition,
    pub grab: GrabOffset,
    pub hover: Option<SlotId>,
}

/// Why a drag did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRefusal {
    /// The card is already matched.
    AlreadyLocked,
    UnknownCard,
    /// Another drag is in progress.
    AlreadyDragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub from: Option<SlotId>,
    pub to: Option<SlotId>,
}

/// Result of ending a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    pub card: CardId,
    /// Highlighted slot at release; `None` means dropped outside.
    pub target: Option<SlotId>,
}

#[derive(Debug, Default, Clone)]
pub struct DragGestureController {
    state: Option<GestureState>,
}

impl DragGestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    pub fn hover(&self) -> Option<SlotId> {
        self.state.and_then(|s| s.hover)
    }

    /// Begin dragging `card`.
    ///
    /// `card_origin` is the card's on-screen top-left when known; the proxy
    /// then keeps the pointer's grab offset. Without it the proxy sits
    /// directly under the pointer.
    pub fn start(
        &mut self,
        card: CardId,
        pointer: ScreenPosition,
        card_origin: Option<ScreenPosition>,
        board: &Board,
    ) -> Result<(), DragRefusal> {
        if self.state.is_some() {
            return Err(DragRefusal::AlreadyDragging);
        }
        let found = board.find_card(card).ok_or(DragRefusal::UnknownCard)?;
        if found.is_locked() {
            return Err(DragRefusal::AlreadyLocked);
        }

        let grab = card_origin
            .map(|origin| pointer.offset_from(origin))
            .unwrap_or_default();
        self.state = Some(GestureState {
            card,
            proxy: pointer.minus(grab),
            grab,
            hover: None,
        });
        Ok(())
    }

    /// Track the pointer. Returns the highlight change, if any.
    pub fn move_to(
        &mut self,
        pointer: ScreenPosition,
        board: &Board,
        hits: &dyn HitTester,
    ) -> Option<HoverChange> {
        let state = self.state.as_mut()?;
        state.proxy = pointer.minus(state.grab);

        let resolved = hits.slot_at(pointer);
        if resolved == state.hover {
            return None;
        }

        let from = state.hover.take();
        let to = resolved.filter(|slot| board.slot(*slot).is_some_and(|s| !s.is_filled()));
        state.hover = to;

        (from != to).then_some(HoverChange { from, to })
    }

    /// Finish the drag at `pointer`, returning what was released where.
    ///
    /// Hover is resolved one last time at the release point. The gesture is
    /// always cleared.
    pub fn end(
        &mut self,
        pointer: ScreenPosition,
        board: &Board,
        hits: &dyn HitTester,
    ) -> Option<DragRelease> {
        self.move_to(pointer, board, hits);
        let state = self.state.take()?;
        Some(DragRelease {
            card: state.card,
            target: state.hover,
        })
    }

    /// Drop any in-flight drag without a placement attempt.
    pub fn abandon(&mut self) -> Option<CardId> {
        self.state.take().map(|s| s.card)
    }
}
