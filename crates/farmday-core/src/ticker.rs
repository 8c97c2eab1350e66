//! Periodic countdown refresh.
//!
//! The ticker owns no state beyond its period. Each tick reads the clock,
//! derives a fresh countdown string and hands it to the callback. Stopping
//! it (callback returns `Break`, or the shutdown future resolves) simply
//! ends the loop; there is never work in flight between ticks.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::MissedTickBehavior;

use crate::reset::countdown_string;

/// Default refresh period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// One countdown refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownTick {
    pub at: DateTime<Utc>,
    pub countdown: String,
}

/// Drives countdown refreshes at a fixed period.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTicker {
    period: Duration,
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl CountdownTicker {
    /// A zero period is bumped to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Derive a tick for a given clock reading.
    pub fn tick_at(now: DateTime<Utc>) -> CountdownTick {
        CountdownTick {
            at: now,
            countdown: countdown_string(now),
        }
    }

    /// Run until `on_tick` breaks or `shutdown` resolves. The first tick
    /// fires immediately. Returns the number of ticks delivered.
    pub async fn run<C, F, S>(&self, clock: C, mut on_tick: F, shutdown: S) -> u64
    where
        C: Fn() -> DateTime<Utc>,
        F: FnMut(CountdownTick) -> ControlFlow<()>,
        S: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        let mut delivered = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!(delivered, "countdown ticker stopped");
                    break;
                }
                _ = interval.tick() => {
                    delivered += 1;
                    if on_tick(Self::tick_at(clock())).is_break() {
                        break;
                    }
                }
            }
        }
        delivered
    }
}
