//! Keyboard focus movement on the game screen.

use crate::board::{CardId, SlotId};

use super::{App, Focus};

impl App {
    /// Switch between the pool and targets columns
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.toggle();
        self.mark_dirty();
    }

    pub fn focus_column(&mut self, focus: Focus) {
        self.focus = focus;
        self.mark_dirty();
    }

    /// Move the focused item up in the current column
    pub fn move_up(&mut self) {
        let index = self.focused_index_mut();
        *index = index.saturating_sub(1);
        self.mark_dirty();
    }

    /// Move the focused item down in the current column
    pub fn move_down(&mut self) {
        let len = self.column_len();
        let index = self.focused_index_mut();
        if len > 0 && *index < len - 1 {
            *index += 1;
        }
        self.mark_dirty();
    }

    /// Card under keyboard focus in the pool
    pub fn focused_card(&self) -> Option<CardId> {
        self.engine
            .board()
            .cards()
            .get(self.pool_index)
            .map(|c| c.id())
    }

    /// Slot under keyboard focus in the targets column
    pub fn focused_slot(&self) -> Option<SlotId> {
        self.engine
            .board()
            .slots()
            .get(self.slot_index)
            .map(|s| s.id())
    }

    /// Put keyboard focus on `card`, e.g. after it was clicked
    pub fn focus_card(&mut self, card: CardId) {
        if let Some(index) = self
            .engine
            .board()
            .cards()
            .iter()
            .position(|c| c.id() == card)
        {
            self.focus = Focus::Pool;
            self.pool_index = index;
        }
    }

    pub fn focus_slot(&mut self, slot: SlotId) {
        if slot.index() < self.engine.board().total() {
            self.focus = Focus::Targets;
            self.slot_index = slot.index();
        }
    }

    fn column_len(&self) -> usize {
        match self.focus {
            Focus::Pool => self.engine.board().cards().len(),
            Focus::Targets => self.engine.board().slots().len(),
        }
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Pool => &mut self.pool_index,
            Focus::Targets => &mut self.slot_index,
        }
    }
}
