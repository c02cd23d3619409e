//! Rendering helpers.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::gesture::{Region, ScreenPosition};

/// Cut `s` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// First row to show so that `cursor` lands inside a window of `visible` rows.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if cursor >= visible {
        cursor + 1 - visible
    } else {
        0
    }
}

pub fn region_of(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// A `width` x `height` box with its top-left at `at`, kept inside `bounds`.
pub fn placed_rect(at: ScreenPosition, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_x = bounds.right().saturating_sub(width);
    let max_y = bounds.bottom().saturating_sub(height);
    Rect::new(
        at.x.clamp(bounds.x, max_x.max(bounds.x)),
        at.y.clamp(bounds.y, max_y.max(bounds.y)),
        width,
        height,
    )
}

/// `width` x `height` rectangle centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
