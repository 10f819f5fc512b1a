//! Single-slot ticker for the auto-advance timer.
//!
//! Runs a callback on a fixed cadence on the tokio runtime. Starting a new
//! ticker always cancels the previous one first, so at most one is ever
//! scheduled.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

struct TickerEntry {
    token: CancellationToken,
}

/// Repeating timer with cancellation.
#[derive(Clone, Default)]
pub struct Ticker {
    entry: Arc<Mutex<Option<TickerEntry>>>,
}

impl Ticker {
    /// Create an idle ticker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a ticker is currently scheduled.
    pub fn is_active(&self) -> bool {
        self.entry.lock().is_some()
    }

    /// Replace any scheduled ticker with one that first fires after `interval`
    /// and then every `interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, interval: Duration, mut on_tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancel = token.clone();
        let first = time::Instant::now() + interval;

        let mut slot = self.entry.lock();
        if let Some(prev) = slot.take() {
            prev.token.cancel();
            trace!("ticker_replaced");
        }

        tokio::spawn(async move {
            trace!(int_ms = interval.as_millis(), "ticker_start");
            let mut ticker = time::interval_at(first, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        trace!("ticker_cancelled");
                        return;
                    }
                    _ = ticker.tick() => {
                        on_tick();
                    }
                }
            }
        });
        *slot = Some(TickerEntry { token });
    }

    /// Stop the ticker if present (non-blocking, idempotent).
    pub fn stop(&self) {
        if let Some(entry) = self.entry.lock().take() {
            entry.token.cancel();
            trace!("ticker_stop");
        }
    }
}
