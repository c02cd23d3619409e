//! Enter and leave the game's terminal mode.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen with mouse capture so clicks and drags
/// arrive as events. Raw mode is enabled separately by the caller.
pub fn enter_game_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_game_mode`] and raw mode.
///
/// Safe to call more than once; errors are ignored so it can run from a
/// panic hook.
pub fn leave_game_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout.
pub fn emergency_restore() {
    leave_game_mode(&mut io::stdout());
}
