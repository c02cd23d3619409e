//! Terminal rendering.
//!
//! The renderer is a pure consumer of engine state: it reads a snapshot,
//! draws it, and records where each card and slot ended up in the engine's
//! hit-area registry. It never decides placement outcomes.

mod game;
mod helpers;
mod screens;
mod theme;

pub use game::HINTS;
pub use helpers::{centered_rect, truncate_to_width};
pub use theme::{
    COLOR_ACCENT, COLOR_ARMED, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM, COLOR_HOVER,
    COLOR_INCORRECT,
};

use ratatui::Frame;

use crate::app::{App, Screen};
use game::render_game_screen;
use screens::{render_end_screen, render_start_screen};

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen() {
        Screen::Start => {
            app.engine.hit_areas_mut().clear();
            render_start_screen(frame, app);
        }
        Screen::Game => render_game_screen(frame, app),
        Screen::End => {
            app.engine.hit_areas_mut().clear();
            render_end_screen(frame, app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingAudio;
    use crate::content::{ContentModel, Step};
    use crate::engine::Engine;
    use crate::events::InputEvent;
    use crate::feedback::Feedback;
    use crate::gesture::{HitTarget, HitTester, ScreenPosition};
    use crate::session::ManualClock;
    use crate::app::{Focus, StatusLine};
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_app() -> App {
        let steps = vec![
            Step::new("Evaporation", "Water turns into vapour"),
            Step::new("Condensation", "Vapour forms clouds"),
            Step::new("Precipitation", "Water falls as rain"),
        ];
        let content = ContentModel::new(Some("Water Cycle".into()), steps).unwrap();
        let engine = Engine::new(content, Box::new(ManualClock::new()), Some(4));
        let status = StatusLine::new();
        let feedback = Feedback::new(Box::new(RecordingAudio::new()), Box::new(status.clone()));
        App::new(engine, feedback, status)
    }

    fn create_app_with_steps(count: usize) -> App {
        let steps = (1..=count)
            .map(|i| Step::new(format!("Step {}", i), format!("Description {}", i)))
            .collect();
        let content = ContentModel::new(Some("Long Process".into()), steps).unwrap();
        let engine = Engine::new(content, Box::new(ManualClock::new()), Some(4));
        let status = StatusLine::new();
        let feedback = Feedback::new(Box::new(RecordingAudio::new()), Box::new(status.clone()));
        App::new(engine, feedback, status)
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        draw_sized(app, 100, 30)
    }

    fn draw_sized(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_start_screen_shows_title() {
        let mut app = create_test_app();
        let terminal = draw(&mut app);
        let text = screen_text(&terminal);
        assert!(text.contains("Water Cycle"));
        assert!(text.contains("Press Enter to start"));
        assert!(app.engine.hit_areas().is_empty());
    }

    #[test]
    fn test_game_screen_registers_every_card_and_slot() {
        let mut app = create_test_app();
        app.apply(InputEvent::StartSession).unwrap();
        let terminal = draw(&mut app);

        assert_eq!(app.engine.hit_areas().len(), 6);
        for card in app.engine.board().cards() {
            assert!(app
                .engine
                .hit_areas()
                .region_of(HitTarget::Card(card.id()))
                .is_some());
        }
        let text = screen_text(&terminal);
        assert!(text.contains("Evaporation"));
        assert!(text.contains("Vapour forms clouds"));
        assert!(text.contains("Time 00:00"));
    }

    #[test]
    fn test_small_terminal_packs_items_onto_single_rows() {
        let mut app = create_app_with_steps(8);
        app.apply(InputEvent::StartSession).unwrap();
        let terminal = draw_sized(&mut app, 80, 24);

        assert_eq!(app.engine.hit_areas().len(), 16);
        for slot in app.engine.board().slots() {
            let region = app
                .engine
                .hit_areas()
                .region_of(HitTarget::Slot(slot.id()))
                .unwrap();
            assert_eq!(region.height, 1);
        }
        let text = screen_text(&terminal);
        assert!(text.contains("Step 8"));
        assert!(text.contains(" Steps "));
    }

    #[test]
    fn test_columns_scroll_to_keep_focus_visible() {
        let mut app = create_app_with_steps(30);
        app.apply(InputEvent::StartSession).unwrap();
        app.focus_column(Focus::Pool);
        for _ in 0..29 {
            app.move_down();
        }
        assert_eq!(app.pool_index, 29);

        let terminal = draw_sized(&mut app, 80, 24);
        let cards = app.engine.board().cards();
        let hits = app.engine.hit_areas();
        assert!(hits.region_of(HitTarget::Card(cards[29].id())).is_some());
        assert!(hits.region_of(HitTarget::Card(cards[0].id())).is_none());
        // 17 rows fit between the column borders
        assert_eq!(hits.len(), 17 + 17);

        let text = screen_text(&terminal);
        assert!(text.contains("14-30/30"));
        assert!(text.contains(" Steps 1-17/30 "));
    }

    #[test]
    fn test_slot_hit_area_resolves_under_pointer() {
        let mut app = create_test_app();
        app.apply(InputEvent::StartSession).unwrap();
        draw(&mut app);

        let slot = app.engine.board().slots()[0].id();
        let region = app
            .engine
            .hit_areas()
            .region_of(HitTarget::Slot(slot))
            .unwrap();
        let inside = ScreenPosition::new(region.x + 1, region.y + 1);
        assert_eq!(app.engine.hit_areas().slot_at(inside), Some(slot));
    }

    #[test]
    fn test_locked_cards_are_not_hit_targets() {
        let mut app = create_test_app();
        app.apply(InputEvent::StartSession).unwrap();
        let card = app.engine.board().cards()[0].clone();
        let slot = app.engine.board().find_slot(card.step_name()).unwrap().id();
        app.apply(InputEvent::DropOnSlot {
            card: card.id(),
            slot,
        })
        .unwrap();

        draw(&mut app);
        assert!(app
            .engine
            .hit_areas()
            .region_of(HitTarget::Card(card.id()))
            .is_none());
        assert_eq!(app.engine.hit_areas().len(), 5);
    }

    #[test]
    fn test_proxy_drawn_while_dragging() {
        let mut app = create_test_app();
        app.apply(InputEvent::StartSession).unwrap();
        draw(&mut app);

        let card = app.engine.board().cards()[1].clone();
        let origin = app
            .engine
            .hit_areas()
            .region_of(HitTarget::Card(card.id()))
            .unwrap()
            .origin();
        app.apply(InputEvent::PointerDragStart {
            card: card.id(),
            position: origin,
        })
        .unwrap();
        app.apply(InputEvent::PointerDragMove {
            position: ScreenPosition::new(2, 25),
        })
        .unwrap();
        let terminal = draw(&mut app);
        let text = screen_text(&terminal);
        let row = text.lines().nth(26).unwrap();
        assert!(row.contains(&card.description()[..8]));
    }

    #[test]
    fn test_end_screen_shows_summary() {
        let mut app = create_test_app();
        app.apply(InputEvent::StartSession).unwrap();
        let pairs: Vec<_> = app
            .engine
            .board()
            .cards()
            .iter()
            .map(|c| (c.id(), app.engine.board().find_slot(c.step_name()).unwrap().id()))
            .collect();
        for (card, slot) in pairs {
            app.apply(InputEvent::DropOnSlot { card, slot }).unwrap();
        }

        let terminal = draw(&mut app);
        let text = screen_text(&terminal);
        assert!(text.contains("Score: 3/3"));
        assert!(text.contains("Time: 00:00"));
        assert!(text.contains("play again"));
    }
}
