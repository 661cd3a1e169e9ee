//! Cancellable periodic ticker.
//!
//! Wraps a `tokio::time::Interval` together with the process shutdown
//! channel so loops read as `while ticker.tick().await { .. }`.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// A fixed-period ticker that stops once shutdown is signalled.
///
/// The first tick fires one full period after construction. Ticks missed
/// while the caller was busy are skipped rather than fired in a burst, so a
/// slow iteration never causes back-to-back iterations.
pub struct Ticker {
    interval: Interval,
    shutdown: watch::Receiver<bool>,
}

impl Ticker {
    pub fn new(period: Duration, shutdown: watch::Receiver<bool>) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval, shutdown }
    }

    /// Wait for the next tick.
    ///
    /// Returns `false` once shutdown has been signalled or the shutdown
    /// sender is gone; the caller should stop its loop.
    pub async fn tick(&mut self) -> bool {
        loop {
            if self.is_shutdown() {
                return false;
            }
            tokio::select! {
                biased;
                changed = self.shutdown.changed() => {
                    if changed.is_err() {
                        return false;
                    }
                }
                _ = self.interval.tick() => return true,
            }
        }
    }

    /// True once shutdown has been signalled.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// A handle to the shutdown channel for work done between ticks.
    #[must_use]
    pub fn shutdown(&self) -> watch::Receiver<bool> {
        self.shutdown.clone()
    }
}
