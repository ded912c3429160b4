//! Deadline oracles polled by the search.
//!
//! A deadline reports the milliseconds left before the agent forfeits;
//! negative means the time is already up. Search compares it against a
//! safety threshold at every node.

use std::time::{Duration, Instant};

/// Remaining-time query.
pub trait Deadline {
    /// Milliseconds left. Negative once expired.
    fn time_left(&self) -> f64;
}

impl<F> Deadline for F
where
    F: Fn() -> f64,
{
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock countdown started at construction.
///
/// ```
/// use std::time::Duration;
/// use isolation::search::{Countdown, Deadline};
///
/// let deadline = Countdown::new(Duration::from_secs(60));
/// assert!(deadline.time_left() > 59_000.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    start: Instant,
    limit: Duration,
}

impl Countdown {
    /// Start a countdown of `limit`.
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Start a countdown of `millis` milliseconds.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Time since the countdown started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Deadline for Countdown {
    fn time_left(&self) -> f64 {
        (self.limit.as_secs_f64() - self.start.elapsed().as_secs_f64()) * 1000.0
    }
}

/// A deadline that never expires. For fixed-depth searches and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbounded;

impl Deadline for Unbounded {
    fn time_left(&self) -> f64 {
        f64::INFINITY
    }
}
