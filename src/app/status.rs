//! Status line announcer.
//!
//! The terminal has no screen reader channel, so announcements land on the
//! status line at the bottom of the game screen. The latest message wins.

use std::cell::RefCell;
use std::rc::Rc;

use crate::traits::Announcer;

/// Shared handle to the status line. Clones see the same message.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: Rc<RefCell<Option<String>>>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.message.borrow().clone()
    }

    pub fn set(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = Some(message.into());
    }

    pub fn clear(&self) {
        *self.message.borrow_mut() = None;
    }
}

impl Announcer for StatusLine {
    fn announce(&mut self, message: &str) {
        tracing::debug!(message, "Announce");
        self.set(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_latest_message() {
        let line = StatusLine::new();
        let mut announcer = line.clone();
        announcer.announce("Try again.");
        announcer.announce("Correct!");
        assert_eq!(line.current().as_deref(), Some("Correct!"));

        line.clear();
        assert_eq!(announcer.current(), None);
    }
}
