//! Terminal host state.
//!
//! [`App`] sits between crossterm and the [`Engine`]: it turns key and mouse
//! events into engine inputs, forwards the resulting events to the feedback
//! collaborators, and keeps the host-only state the renderer needs (focus,
//! the incorrect pulse, the status line).
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which column keyboard navigation moves in
//! - [`StatusLine`] - Announcement sink shown on the status line

mod handlers;
mod navigation;
mod status;
mod types;

pub use status::StatusLine;
pub use types::{Focus, PendingPress, Pulse, Screen};

use std::time::{Duration, Instant};

use crate::adapters::TerminalBell;
use crate::board::CardId;
use crate::config::GameConfig;
use crate::content::ContentModel;
use crate::engine::Engine;
use crate::error::GameResult;
use crate::events::{EngineEvent, InputEvent};
use crate::feedback::Feedback;
use crate::placement::Outcome;
use crate::session::{SessionTick, SystemClock, TickSender};

pub const MSG_SOUND_ON: &str = "Sound on";
pub const MSG_SOUND_OFF: &str = "Sound off";

pub struct App {
    pub engine: Engine,
    pub feedback: Feedback,
    pub status: StatusLine,
    pub focus: Focus,
    /// Index into the pool (cards) column
    pub pool_index: usize,
    /// Index into the targets (slots) column
    pub slot_index: usize,
    pub pending_press: Option<PendingPress>,
    pub pulse: Option<Pulse>,
    pub pulse_duration: Duration,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(engine: Engine, feedback: Feedback, status: StatusLine) -> Self {
        Self {
            engine,
            feedback,
            status,
            focus: Focus::default(),
            pool_index: 0,
            slot_index: 0,
            pending_press: None,
            pulse: None,
            pulse_duration: crate::config::DEFAULT_PULSE_DURATION,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn with_pulse_duration(mut self, duration: Duration) -> Self {
        self.pulse_duration = duration;
        self
    }

    /// Wire up the real collaborators: system clock, terminal bell and the
    /// status line.
    pub fn from_config(content: ContentModel, config: &GameConfig, ticks: TickSender) -> Self {
        let engine = Engine::new(content, Box::new(SystemClock), config.seed)
            .with_ticks(ticks, config.tick_interval);
        let status = StatusLine::new();
        let feedback = Feedback::new(Box::new(TerminalBell::stdout()), Box::new(status.clone()))
            .with_muted(config.muted);
        Self::new(engine, feedback, status).with_pulse_duration(config.pulse_duration)
    }

    pub fn screen(&self) -> Screen {
        Screen::from(self.engine.status())
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Send one input through the engine and act on what comes back.
    pub fn apply(&mut self, input: InputEvent) -> GameResult<()> {
        let events = self.engine.dispatch(input)?;
        self.feedback.deliver(&events);
        for event in &events {
            self.on_engine_event(event);
        }
        self.mark_dirty();
        Ok(())
    }

    fn on_engine_event(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::SessionStarted { .. } => {
                self.status.clear();
                self.pulse = None;
                self.pending_press = None;
                self.focus = Focus::Pool;
                self.pool_index = 0;
                self.slot_index = 0;
            }
            EngineEvent::Placement {
                card,
                outcome: Outcome::Incorrect,
                ..
            } => self.start_pulse(*card, Instant::now()),
            EngineEvent::Placement {
                card,
                outcome: Outcome::Correct,
                ..
            } => {
                if self.pulse.is_some_and(|p| p.card == *card) {
                    self.pulse = None;
                }
            }
            EngineEvent::SessionFinished(summary) => {
                self.pulse = None;
                tracing::info!(score = summary.score, elapsed = %summary.elapsed_display, "Game over");
            }
            _ => {}
        }
    }

    /// A timer tick arrived. Stale ones are dropped.
    pub fn on_tick(&mut self, tick: SessionTick) {
        if self.engine.is_current_tick(tick) {
            self.mark_dirty();
        } else {
            tracing::trace!(generation = tick.generation, "Stale tick dropped");
        }
    }

    pub fn start_pulse(&mut self, card: CardId, now: Instant) {
        self.pulse = Some(Pulse {
            card,
            until: now + self.pulse_duration,
        });
    }

    /// Clear the pulse once its time is up. Returns `true` when it was
    /// cleared.
    pub fn expire_pulse(&mut self, now: Instant) -> bool {
        match self.pulse {
            Some(pulse) if now >= pulse.until => {
                self.pulse = None;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    pub fn is_pulsing(&self, card: CardId) -> bool {
        self.pulse.is_some_and(|p| p.card == card)
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.feedback.toggle_mute();
        self.feedback
            .announce(if muted { MSG_SOUND_OFF } else { MSG_SOUND_ON });
        self.mark_dirty();
    }
}
