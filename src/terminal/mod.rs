//! Terminal ownership for the game.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture, and puts it back when dropped. The panic hook
//! from [`setup_panic_hook`] covers the paths where drop never runs.
//!
//! ```no_run
//! use stepmatch::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let terminal = manager.terminal();
//!     // ... draw frames ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_game_mode, leave_game_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalManager {
    terminal: GameTerminal,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = enter_game_mode(&mut stdout) {
            leave_game_mode(&mut stdout);
            return Err(e);
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("Terminal entered game mode");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut GameTerminal {
        &mut self.terminal
    }

    /// Give the terminal back. Later calls and the drop are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_game_mode(self.terminal.backend_mut());
        tracing::debug!("Terminal restored");
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
