//! Terminal bell audio adapter.
//!
//! A terminal has exactly one sound, so cues are told apart by count: one
//! bell for success, two for failure.

use std::io::{self, Write};

use crate::events::Cue;
use crate::traits::AudioSink;

const BEL: &[u8] = b"\x07";

pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        let rings = match cue {
            Cue::Success => 1,
            Cue::Failure => 2,
        };
        for _ in 0..rings {
            if let Err(e) = self.out.write_all(BEL) {
                tracing::debug!("Bell write failed: {}", e);
                return;
            }
        }
        let _ = self.out.flush();
    }
}
