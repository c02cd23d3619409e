//! Game screen: header, step targets, description pool, status line and the
//! floating drag proxy.
//!
//! Every card and slot drawn here is registered as a hit area so the mouse
//! handlers and the drag controller can resolve what lies under the pointer.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, Focus};
use crate::engine::{CardView, ProxyView, SlotView, Snapshot};
use crate::gesture::HitTarget;

use super::helpers::{placed_rect, region_of, scroll_offset, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_ARMED, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM, COLOR_HEADER, COLOR_HOVER,
    COLOR_INCORRECT, COLOR_PROXY,
};

const ITEM_HEIGHT: u16 = 3;
const PROXY_MAX_WIDTH: u16 = 40;

pub const HINTS: &str = "Enter/Space select·place  Tab switch column  r restart  m sound  q quit";

pub fn render_game_screen(frame: &mut Frame, app: &mut App) {
    let snapshot = app.engine.snapshot();
    let [header, body, status, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(ITEM_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [targets, pool] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);

    render_header(frame, header, &snapshot, app.feedback.is_muted());

    app.engine.hit_areas_mut().clear();
    render_targets(frame, targets, &snapshot, app);
    render_pool(frame, pool, &snapshot, app);

    let message = app.status.current().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(message).style(Style::default().fg(COLOR_ACCENT)),
        status,
    );
    frame.render_widget(
        Paragraph::new(HINTS).style(Style::default().fg(COLOR_DIM)),
        hints,
    );

    if let Some(proxy) = &snapshot.proxy {
        let width = pool.width.min(PROXY_MAX_WIDTH);
        render_proxy(frame, proxy, width);
    }
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &Snapshot, muted: bool) {
    let sound = if muted { "sound off" } else { "sound on" };
    let line = Line::from(vec![
        Span::styled(
            snapshot.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(format!("Score {}", snapshot.score)),
        Span::raw("   "),
        Span::raw(format!("Left {}", snapshot.remaining)),
        Span::raw("   "),
        Span::raw(format!("Time {}", snapshot.elapsed)),
        Span::raw("   "),
        Span::styled(sound, Style::default().fg(COLOR_DIM)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn column_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
        .title(title)
}

/// Column title, with the visible range when the column is scrolled or cut.
fn column_title(name: &str, offset: usize, shown: usize, count: usize) -> String {
    if shown < count {
        format!(" {} {}-{}/{} ", name, offset + 1, offset + shown, count)
    } else {
        format!(" {} ", name)
    }
}

/// Rows for a column of `count` items, plus the index of the first one drawn.
///
/// Items get a bordered box when every one of them fits, a single line each
/// otherwise. The window scrolls so the item at `cursor` is always on screen.
fn item_rows(area: Rect, count: usize, cursor: usize) -> (usize, Vec<Rect>) {
    let height = if count * ITEM_HEIGHT as usize <= area.height as usize {
        ITEM_HEIGHT
    } else {
        1
    };
    let visible = (area.height / height) as usize;
    let offset = scroll_offset(cursor.min(count.saturating_sub(1)), visible);
    let rows = (0..count.saturating_sub(offset).min(visible) as u16)
        .map(|i| Rect::new(area.x, area.y + i * height, area.width, height))
        .collect();
    (offset, rows)
}

fn render_targets(frame: &mut Frame, area: Rect, snapshot: &Snapshot, app: &mut App) {
    let focused = app.focus == Focus::Targets;
    let count = snapshot.slots.len();
    let inner = column_block(String::new(), focused).inner(area);
    let (offset, rows) = item_rows(inner, count, app.slot_index);
    let block = column_block(column_title("Steps", offset, rows.len(), count), focused);
    frame.render_widget(block, area);

    for (rect, (index, slot)) in rows
        .into_iter()
        .zip(snapshot.slots.iter().enumerate().skip(offset))
    {
        let has_focus = focused && index == app.slot_index;
        render_slot(frame, rect, slot, has_focus);
        app.engine
            .hit_areas_mut()
            .register(region_of(rect), HitTarget::Slot(slot.id));
    }
}

fn render_slot(frame: &mut Frame, rect: Rect, slot: &SlotView, has_focus: bool) {
    let border = if slot.highlighted {
        Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD)
    } else if slot.filled {
        Style::default().fg(COLOR_CORRECT)
    } else if has_focus {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    if rect.height < ITEM_HEIGHT {
        let label = truncate_to_width(&slot.label, rect.width.saturating_sub(2) as usize);
        let used = unicode_width::UnicodeWidthStr::width(label.as_str()) + 4;
        let rest = rect.width.saturating_sub(used as u16) as usize;
        let body = match &slot.occupant_text {
            Some(text) => Span::styled(
                truncate_to_width(text, rest),
                Style::default().fg(COLOR_CORRECT),
            ),
            None => Span::styled(
                truncate_to_width("drop here", rest),
                Style::default().fg(COLOR_DIM),
            ),
        };
        let line = Line::from(vec![
            Span::styled(if has_focus { "› " } else { "  " }, border),
            Span::styled(label, border),
            Span::raw(": "),
            body,
        ]);
        frame.render_widget(Paragraph::new(line), rect);
        return;
    }

    let label_width = rect.width.saturating_sub(4) as usize;
    let title = format!(" {} ", truncate_to_width(&slot.label, label_width));
    let body = match &slot.occupant_text {
        Some(text) => Span::styled(
            truncate_to_width(text, rect.width.saturating_sub(2) as usize),
            Style::default().fg(COLOR_CORRECT),
        ),
        None => Span::styled("drop here", Style::default().fg(COLOR_DIM)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);
    frame.render_widget(Paragraph::new(Line::from(body)).block(block), rect);
}

fn render_pool(frame: &mut Frame, area: Rect, snapshot: &Snapshot, app: &mut App) {
    let focused = app.focus == Focus::Pool;
    let count = snapshot.cards.len();
    let inner = column_block(String::new(), focused).inner(area);
    let (offset, rows) = item_rows(inner, count, app.pool_index);
    let block = column_block(column_title("Descriptions", offset, rows.len(), count), focused);
    frame.render_widget(block, area);

    for (rect, (index, card)) in rows
        .into_iter()
        .zip(snapshot.cards.iter().enumerate().skip(offset))
    {
        let has_focus = focused && index == app.pool_index;
        let pulsing = app.is_pulsing(card.id);
        render_card(frame, rect, card, has_focus, pulsing);
        if !card.locked {
            app.engine
                .hit_areas_mut()
                .register(region_of(rect), HitTarget::Card(card.id));
        }
    }
}

fn render_card(frame: &mut Frame, rect: Rect, card: &CardView, has_focus: bool, pulsing: bool) {
    let (border, text) = if card.locked {
        (Style::default().fg(COLOR_DIM), Style::default().fg(COLOR_DIM))
    } else if pulsing {
        (
            Style::default().fg(COLOR_INCORRECT).add_modifier(Modifier::BOLD),
            Style::default().fg(COLOR_INCORRECT),
        )
    } else if card.dragging {
        (Style::default().fg(COLOR_DIM), Style::default().fg(COLOR_DIM))
    } else if card.armed {
        (
            Style::default().fg(COLOR_ARMED).add_modifier(Modifier::BOLD),
            Style::default().fg(COLOR_ARMED),
        )
    } else if has_focus {
        (
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            Style::default(),
        )
    } else {
        (Style::default().fg(COLOR_BORDER), Style::default())
    };

    let width = rect.width.saturating_sub(2) as usize;
    let content = if card.locked {
        truncate_to_width(&format!("✓ {}", card.text), width)
    } else {
        truncate_to_width(&card.text, width)
    };
    if rect.height < ITEM_HEIGHT {
        let marker = if has_focus { "› " } else { "  " };
        let line = Line::from(vec![Span::styled(marker, border), Span::styled(content, text)]);
        frame.render_widget(Paragraph::new(line), rect);
        return;
    }
    let block = Block::default().borders(Borders::ALL).border_style(border);
    frame.render_widget(Paragraph::new(content).style(text).block(block), rect);
}

fn render_proxy(frame: &mut Frame, proxy: &ProxyView, width: u16) {
    let rect = placed_rect(proxy.position, width, ITEM_HEIGHT, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(COLOR_PROXY));
    let text = truncate_to_width(&proxy.text, rect.width.saturating_sub(2) as usize);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(COLOR_PROXY))
            .block(block),
        rect,
    );
}
