//! Polling loop that drives capture, comparison and notification.
//!
//! This module provides [`PollLoop`], which owns the previously reported
//! snapshot and runs one capture → compare → notify cycle per interval.

use std::convert::Infallible;
use std::time::Duration;

use super::change::{changed, diff};
use crate::network::{AddressFetcher, InterfaceSnapshot};
use crate::time::{Clock, Sleeper, SystemClock, TokioSleeper};
use crate::webhook::{WebhookSender, format};

/// What a single cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A change was detected and a notification attempted.
    Notified {
        /// Whether the endpoint accepted the notification.
        delivered: bool,
    },
    /// The snapshot matched the previous one; nothing was sent.
    Unchanged,
    /// The OS query failed; the cycle was skipped.
    CaptureFailed,
}

/// Periodic interface monitor.
///
/// Holds the last reported snapshot as its only mutable state. Each cycle
/// captures the current snapshot and, if it differs from the previous one
/// (or no previous one exists), formats and sends a notification and then
/// stores the new snapshot whatever the delivery outcome.
///
/// # Type Parameters
///
/// * `F` - The [`AddressFetcher`] used to capture snapshots
/// * `W` - The [`WebhookSender`] used to deliver notifications
/// * `C` - The [`Clock`] for notification timestamps (defaults to [`SystemClock`])
/// * `S` - The [`Sleeper`] used between cycles (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```ignore
/// use ifwatch::monitor::PollLoop;
/// use std::time::Duration;
///
/// let mut monitor = PollLoop::new(fetcher, webhook, "web-01", Duration::from_secs(300));
/// monitor.run().await;
/// ```
#[derive(Debug)]
pub struct PollLoop<F, W, C = SystemClock, S = TokioSleeper> {
    fetcher: F,
    sender: W,
    clock: C,
    sleeper: S,
    hostname: String,
    interval: Duration,
    previous: Option<InterfaceSnapshot>,
}

impl<F, W> PollLoop<F, W> {
    /// Creates a poll loop using the system clock and tokio timers.
    #[must_use]
    pub fn new(fetcher: F, sender: W, hostname: impl Into<String>, interval: Duration) -> Self {
        Self {
            fetcher,
            sender,
            clock: SystemClock,
            sleeper: TokioSleeper,
            hostname: hostname.into(),
            interval,
            previous: None,
        }
    }
}

impl<F, W, C, S> PollLoop<F, W, C, S> {
    /// Replaces the clock used for notification timestamps.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> PollLoop<F, W, C2, S> {
        PollLoop {
            fetcher: self.fetcher,
            sender: self.sender,
            clock,
            sleeper: self.sleeper,
            hostname: self.hostname,
            interval: self.interval,
            previous: self.previous,
        }
    }

    /// Replaces the sleeper used between cycles.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> PollLoop<F, W, C, S2> {
        PollLoop {
            fetcher: self.fetcher,
            sender: self.sender,
            clock: self.clock,
            sleeper,
            hostname: self.hostname,
            interval: self.interval,
            previous: self.previous,
        }
    }

    /// Returns the interval between cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the host name placed in notifications.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the last reported snapshot, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<&InterfaceSnapshot> {
        self.previous.as_ref()
    }

    /// Returns the notification sender.
    #[must_use]
    pub const fn sender(&self) -> &W {
        &self.sender
    }
}

impl<F, W, C, S> PollLoop<F, W, C, S>
where
    F: AddressFetcher,
    W: WebhookSender,
    C: Clock,
    S: Sleeper,
{
    /// Runs a single capture → compare → notify cycle.
    ///
    /// A capture failure is logged and leaves the previous snapshot as is.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let current = match self.fetcher.capture() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("{e}; skipping this cycle");
                return CycleOutcome::CaptureFailed;
            }
        };

        if !changed(self.previous.as_ref(), &current) {
            tracing::debug!("No network interface changes detected");
            return CycleOutcome::Unchanged;
        }

        tracing::info!("Network interface changes detected, sending update");
        if let Some(previous) = &self.previous {
            for change in diff(previous, &current) {
                tracing::info!("{change}");
            }
        }

        let embed = format(&current, &self.hostname, self.clock.now());
        let delivered = self.sender.send(&embed).await;

        self.previous = Some(current);
        CycleOutcome::Notified { delivered }
    }

    /// Runs cycles until `should_stop` returns true.
    ///
    /// `should_stop` receives the number of completed cycles and is checked
    /// before every cycle. The loop sleeps for the interval between cycles,
    /// never after the final one. Returns the number of completed cycles.
    pub async fn run_until(&mut self, mut should_stop: impl FnMut(usize) -> bool) -> usize {
        let mut completed = 0;

        while !should_stop(completed) {
            if completed > 0 {
                self.sleeper.sleep(self.interval).await;
            }
            self.run_cycle().await;
            completed += 1;
        }

        completed
    }

    /// Runs cycles forever, sleeping for the interval after each one.
    pub async fn run(&mut self) -> Infallible {
        loop {
            self.run_cycle().await;
            self.sleeper.sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
