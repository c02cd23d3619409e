//! Screen geometry for gestures.

use serde::{Deserialize, Serialize};

/// Screen position in terminal cells (column, row).
///
/// The origin (0, 0) is at the top-left corner of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenPosition {
    /// Column position (0-indexed from left edge)
    pub x: u16,
    /// Row position (0-indexed from top edge)
    pub y: u16,
}

impl ScreenPosition {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offset of this position from `origin`, clamped at zero.
    pub fn offset_from(&self, origin: ScreenPosition) -> GrabOffset {
        GrabOffset {
            dx: self.x.saturating_sub(origin.x),
            dy: self.y.saturating_sub(origin.y),
        }
    }

    /// Move back by `offset`, clamped at the screen edge.
    pub fn minus(&self, offset: GrabOffset) -> ScreenPosition {
        ScreenPosition {
            x: self.x.saturating_sub(offset.dx),
            y: self.y.saturating_sub(offset.dy),
        }
    }
}

/// Where inside a card the pointer grabbed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GrabOffset {
    pub dx: u16,
    pub dy: u16,
}

/// An axis-aligned rectangle of terminal cells.
///
/// Mirrors ratatui's `Rect` so the engine does not depend on a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> ScreenPosition {
        ScreenPosition::new(self.x, self.y)
    }

    #[inline]
    pub fn contains(&self, pos: ScreenPosition) -> bool {
        pos.x >= self.x
            && pos.x < self.x.saturating_add(self.width)
            && pos.y >= self.y
            && pos.y < self.y.saturating_add(self.height)
    }
}
