//! Session lifecycle and timing.
//!
//! ```text
//! NotStarted --start()--> Running --remaining hits 0--> Finished
//!      ^                                                   |
//!      +------------------- rebuild() ---------------------+
//! ```
//!
//! Elapsed time is derived rather than accumulated: `now - started_at` while
//! running, frozen at the value computed by `finish()` afterwards. The live
//! display is refreshed by an [`ElapsedTicker`] that the controller starts
//! with the session and cancels exactly once when the session finishes or is
//! rebuilt.

pub mod clock;
pub mod ticker;

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ticker::{
    tick_channel, ElapsedTicker, SessionTick, TickReceiver, TickSender, DEFAULT_TICK_INTERVAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Finished,
}

/// Final figures shown on the end screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub total: usize,
    pub elapsed: Duration,
    /// `MM:SS`
    pub elapsed_display: String,
    pub finished_at: DateTime<Utc>,
}

/// Format a duration as zero-padded `MM:SS`. Minutes do not roll over into
/// hours.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub struct SessionController {
    status: SessionStatus,
    score: u32,
    remaining: usize,
    total: usize,
    started_at: Option<Instant>,
    frozen_elapsed: Option<Duration>,
    finished_at: Option<DateTime<Utc>>,
    /// Bumped on every start; stale ticks are recognised by it.
    generation: u64,
    clock: Box<dyn Clock>,
    tick_target: Option<(TickSender, Duration)>,
    ticker: Option<ElapsedTicker>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("status", &self.status)
            .field("score", &self.score)
            .field("remaining", &self.remaining)
            .field("total", &self.total)
            .field("generation", &self.generation)
            .finish()
    }
}

impl SessionController {
    pub fn new(total: usize, clock: Box<dyn Clock>) -> Self {
        Self {
            status: SessionStatus::NotStarted,
            score: 0,
            remaining: total,
            total,
            started_at: None,
            frozen_elapsed: None,
            finished_at: None,
            generation: 0,
            clock,
            tick_target: None,
            ticker: None,
        }
    }

    /// Send a [`SessionTick`] to `tx` every `period` while running.
    pub fn with_ticks(mut self, tx: TickSender, period: Duration) -> Self {
        self.tick_target = Some((tx, period));
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Begin a session. Returns the new generation, or `None` when a session
    /// is already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.is_running() {
            tracing::debug!("start() ignored: session already running");
            return None;
        }

        self.cancel_ticker();
        self.score = 0;
        self.remaining = self.total;
        self.started_at = Some(self.clock.now());
        self.frozen_elapsed = None;
        self.finished_at = None;
        self.generation += 1;
        self.status = SessionStatus::Running;

        if let Some((tx, period)) = &self.tick_target {
            self.ticker = ElapsedTicker::spawn(self.generation, *period, tx.clone());
        }

        tracing::info!(
            generation = self.generation,
            total = self.total,
            "Session started"
        );
        Some(self.generation)
    }

    /// Count one correct placement. Returns the new remaining count.
    ///
    /// Finishing is left to the caller so the final placement event is
    /// emitted before the session-finished event.
    pub(crate) fn record_correct(&mut self) -> usize {
        self.score += 1;
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// End the running session, freezing elapsed time.
    pub(crate) fn finish(&mut self) -> Option<SessionSummary> {
        if !self.is_running() {
            return None;
        }

        let elapsed = self.elapsed();
        self.cancel_ticker();
        let finished_at = Utc::now();
        self.frozen_elapsed = Some(elapsed);
        self.finished_at = Some(finished_at);
        self.status = SessionStatus::Finished;

        let summary = self.build_summary(elapsed, finished_at);
        tracing::info!(
            generation = self.generation,
            score = summary.score,
            elapsed = %summary.elapsed_display,
            "Session finished"
        );
        Some(summary)
    }

    /// Return to `NotStarted` for a board of `total` steps, abandoning any
    /// running session.
    pub(crate) fn rebuild(&mut self, total: usize) {
        self.cancel_ticker();
        self.status = SessionStatus::NotStarted;
        self.total = total;
        self.remaining = total;
        self.score = 0;
        self.started_at = None;
        self.frozen_elapsed = None;
        self.finished_at = None;
    }

    pub fn elapsed(&self) -> Duration {
        match self.status {
            SessionStatus::NotStarted => Duration::ZERO,
            SessionStatus::Running => self
                .started_at
                .map(|start| self.clock.now().saturating_duration_since(start))
                .unwrap_or_default(),
            SessionStatus::Finished => self.frozen_elapsed.unwrap_or_default(),
        }
    }

    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed())
    }

    /// Final figures, once the session has finished.
    pub fn summary(&self) -> Option<SessionSummary> {
        match (self.status, self.frozen_elapsed, self.finished_at) {
            (SessionStatus::Finished, Some(elapsed), Some(finished_at)) => {
                Some(self.build_summary(elapsed, finished_at))
            }
            _ => None,
        }
    }

    fn build_summary(&self, elapsed: Duration, finished_at: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            score: self.score,
            total: self.total,
            elapsed,
            elapsed_display: format_elapsed(elapsed),
            finished_at,
        }
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(total: usize) -> (SessionController, ManualClock) {
        let clock = ManualClock::new();
        (SessionController::new(total, Box::new(clock.clone())), clock)
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "60:00");
        assert_eq!(format_elapsed(Duration::from_secs(6000 + 7)), "100:07");
    }

    #[test]
    fn test_new_session_is_not_started() {
        let (session, _) = controller(3);
        assert_eq!(session.status(), SessionStatus::NotStarted);
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let (mut session, clock) = controller(3);
        assert_eq!(session.start(), Some(1));
        session.record_correct();
        clock.advance(Duration::from_secs(5));

        assert_eq!(session.start(), None);
        assert_eq!(session.score(), 1, "double start must not reset");
        assert_eq!(session.elapsed(), Duration::from_secs(5));
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_elapsed_is_derived_then_frozen() {
        let (mut session, clock) = controller(1);
        session.start();
        clock.advance(Duration::from_secs(42));
        assert_eq!(session.elapsed_display(), "00:42");

        assert_eq!(session.record_correct(), 0);
        let summary = session.finish().unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.elapsed_display, "00:42");

        clock.advance(Duration::from_secs(100));
        assert_eq!(session.elapsed(), Duration::from_secs(42));
        assert_eq!(session.summary().unwrap().elapsed, Duration::from_secs(42));
    }

    #[test]
    fn test_summary_is_stable_after_finish() {
        let (mut session, clock) = controller(1);
        session.start();
        session.record_correct();
        let at_finish = session.finish().unwrap();

        std::thread::sleep(Duration::from_millis(20));
        clock.advance(Duration::from_secs(30));

        let first = session.summary().unwrap();
        let second = session.summary().unwrap();
        assert_eq!(first, at_finish);
        assert_eq!(second.finished_at, at_finish.finished_at);
    }

    #[test]
    fn test_restart_clears_finish_time() {
        let (mut session, _) = controller(1);
        session.start();
        session.finish();
        assert!(session.summary().is_some());

        session.start();
        assert!(session.summary().is_none());
        session.rebuild(1);
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_finish_only_from_running() {
        let (mut session, _) = controller(1);
        assert!(session.finish().is_none());
        session.start();
        assert!(session.finish().is_some());
        assert!(session.finish().is_none(), "finish happens exactly once");
        assert_eq!(session.status(), SessionStatus::Finished);
    }

    #[test]
    fn test_start_after_finish_resets_counters() {
        let (mut session, _) = controller(2);
        session.start();
        session.record_correct();
        session.record_correct();
        session.finish();

        assert_eq!(session.start(), Some(2));
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn test_rebuild_abandons_running_session() {
        let (mut session, clock) = controller(2);
        session.start();
        session.record_correct();
        clock.advance(Duration::from_secs(9));

        session.rebuild(4);
        assert_eq!(session.status(), SessionStatus::NotStarted);
        assert_eq!(session.total(), 4);
        assert_eq!(session.remaining(), 4);
        assert_eq!(session.score(), 0);
        assert_eq!(session.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_ticker_runs_only_while_running() {
        let (tx, mut rx) = tick_channel();
        let clock = ManualClock::new();
        let mut session = SessionController::new(1, Box::new(clock))
            .with_ticks(tx, Duration::from_millis(10));

        assert!(!session.ticker_active());
        let generation = session.start().unwrap();
        assert!(session.ticker_active());
        assert_eq!(rx.recv().await.unwrap().generation, generation);

        session.record_correct();
        session.finish();
        assert!(!session.ticker_active());

        tokio::time::sleep(Duration::from_millis(30)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rebuild_cancels_ticker_and_new_session_has_new_generation() {
        let (tx, mut rx) = tick_channel();
        let mut session = SessionController::new(2, Box::new(ManualClock::new()))
            .with_ticks(tx, Duration::from_millis(10));

        let first = session.start().unwrap();
        session.rebuild(2);
        assert!(!session.ticker_active());
        let second = session.start().unwrap();
        assert_ne!(first, second);

        // Eventually only ticks of the new generation arrive
        tokio::time::sleep(Duration::from_millis(35)).await;
        let mut last = None;
        while let Ok(tick) = rx.try_recv() {
            last = Some(tick.generation);
        }
        assert_eq!(last, Some(second));
    }
}
