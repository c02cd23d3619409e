//! Cancellable elapsed-time sampler.
//!
//! While a session runs, a background task sends a [`SessionTick`] every
//! period so the host can refresh its timer display. Ticks carry no time
//! value, only the session generation; the host reads the elapsed time from
//! the session itself and drops ticks from an older generation.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default sampling period for the timer display.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTick {
    pub generation: u64,
}

pub type TickSender = mpsc::UnboundedSender<SessionTick>;
pub type TickReceiver = mpsc::UnboundedReceiver<SessionTick>;

pub fn tick_channel() -> (TickSender, TickReceiver) {
    mpsc::unbounded_channel()
}

/// Handle to a running sampler. Dropping it aborts the task.
#[derive(Debug)]
pub struct ElapsedTicker {
    generation: u64,
    handle: JoinHandle<()>,
}

impl ElapsedTicker {
    /// Spawn the sampler on the current tokio runtime.
    ///
    /// Returns `None` outside a runtime; the session then runs without a
    /// live display, which does not affect timing.
    pub fn spawn(generation: u64, period: Duration, tx: TickSender) -> Option<Self> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!("No tokio runtime; elapsed ticker not started");
                return None;
            }
        };

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(SessionTick { generation }).is_err() {
                    break;
                }
            }
        });

        Some(Self { generation, handle })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the sampler. Consumes the handle so it cannot be cancelled twice.
    pub fn cancel(self) {
        tracing::debug!(generation = self.generation, "Elapsed ticker cancelled");
        // Drop aborts
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
