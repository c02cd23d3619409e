//! Start and end screens.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::events::MSG_FINISHED;

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 9;

fn dialog() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER))
}

pub fn render_start_screen(frame: &mut Frame, app: &App) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    let total = app.engine.board().total();

    let lines = vec![
        Line::from(Span::styled(
            app.engine.content().title().to_string(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Match each of the {} steps with its description.", total)),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(Span::styled("q to quit", Style::default().fg(COLOR_DIM))),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(dialog())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_end_screen(frame: &mut Frame, app: &App) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    let session = app.engine.session();
    let (score, total, elapsed) = match session.summary() {
        Some(summary) => (summary.score, summary.total, summary.elapsed_display),
        None => (session.score(), session.total(), session.elapsed_display()),
    };

    let lines = vec![
        Line::from(Span::styled(
            MSG_FINISHED,
            Style::default().fg(COLOR_CORRECT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Score: {}/{}", score, total)),
        Line::from(format!("Time: {}", elapsed)),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to play again",
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(Span::styled("q to quit", Style::default().fg(COLOR_DIM))),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(dialog())
            .alignment(Alignment::Center),
        area,
    );
}
