//! Key and mouse handling.
//!
//! Mouse input is disambiguated here: a left press followed by movement is a
//! drag (press position first, then every move), a press and release without
//! movement is a click on whatever was under the press.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::error::GameResult;
use crate::events::InputEvent;
use crate::gesture::{HitTarget, HitTester, ScreenPosition};

use super::{App, Focus, PendingPress, Screen};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> GameResult<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        match (self.screen(), key.code) {
            (_, KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Char('m')) => self.toggle_mute(),
            (Screen::Start | Screen::End, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r')) => {
                self.apply(InputEvent::StartSession)?
            }
            (Screen::Game, code) => self.handle_game_key(code)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_game_key(&mut self, code: KeyCode) -> GameResult<()> {
        match code {
            KeyCode::Char('r') => self.apply(InputEvent::ResetSession)?,
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Left => self.focus_column(Focus::Pool),
            KeyCode::Right => self.focus_column(Focus::Targets),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused()?,
            KeyCode::Esc => {
                if let Some(card) = self.engine.selection().armed() {
                    self.apply(InputEvent::SelectToggle { card })?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Enter/Space: toggle the focused card, or place the armed card on the
    /// focused slot.
    fn activate_focused(&mut self) -> GameResult<()> {
        match self.focus {
            Focus::Pool => {
                if let Some(card) = self.focused_card() {
                    self.apply(InputEvent::SelectToggle { card })?;
                    if self.engine.selection().is_armed(card) {
                        self.focus_column(Focus::Targets);
                    }
                }
            }
            Focus::Targets => {
                if let Some(slot) = self.focused_slot() {
                    self.apply(InputEvent::SlotActivate { slot })?;
                }
            }
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> GameResult<()> {
        let position = ScreenPosition::new(mouse.column, mouse.row);

        if self.screen() != Screen::Game {
            if let MouseEventKind::Up(MouseButton::Left) = mouse.kind {
                self.apply(InputEvent::StartSession)?;
            }
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pending_press = Some(PendingPress {
                    at: position,
                    target: self.engine.hit_areas().target_at(position),
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => self.pointer_moved(position)?,
            MouseEventKind::Up(MouseButton::Left) => self.pointer_released(position)?,
            _ => {}
        }
        Ok(())
    }

    fn pointer_moved(&mut self, position: ScreenPosition) -> GameResult<()> {
        if !self.engine.gesture().is_dragging() {
            // First movement after a press on a card starts the drag
            let Some(PendingPress {
                at,
                target: Some(HitTarget::Card(card)),
            }) = self.pending_press.take()
            else {
                return Ok(());
            };
            self.focus_card(card);
            self.apply(InputEvent::PointerDragStart { card, position: at })?;
            if !self.engine.gesture().is_dragging() {
                return Ok(());
            }
        }
        self.apply(InputEvent::PointerDragMove { position })
    }

    fn pointer_released(&mut self, position: ScreenPosition) -> GameResult<()> {
        if self.engine.gesture().is_dragging() {
            self.pending_press = None;
            return self.apply(InputEvent::PointerDragEnd { position });
        }

        match self.pending_press.take().and_then(|press| press.target) {
            Some(HitTarget::Card(card)) => {
                self.focus_card(card);
                self.apply(InputEvent::SelectToggle { card })
            }
            Some(HitTarget::Slot(slot)) => {
                self.focus_slot(slot);
                self.apply(InputEvent::SlotActivate { slot })
            }
            None => Ok(()),
        }
    }
}
