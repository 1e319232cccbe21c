//! Display refresh clock
//!
//! The tween engine suspends only here: it awaits the next refresh tick and
//! samples its duration at the returned instant.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Source of display refresh ticks
#[async_trait]
pub trait FrameClock: Send {
    /// Current time on this clock
    fn now(&self) -> Instant;

    /// Wait for the next refresh and return its timestamp
    ///
    /// Must be cancel safe: the service polls it inside `select!`.
    async fn tick(&mut self) -> Instant;
}

/// Frame clock backed by a tokio interval
///
/// Timestamps come from tokio's clock, so paused-time tests see exact
/// frame spacing.
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn new(frame_interval: Duration) -> Self {
        let mut interval = time::interval(frame_interval.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl FrameClock for IntervalClock {
    fn now(&self) -> Instant {
        time::Instant::now().into_std()
    }

    async fn tick(&mut self) -> Instant {
        // A late tick reports when it actually fired, not its deadline
        self.interval.tick().await;
        self.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_clock_spacing() {
        let mut clock = IntervalClock::new(Duration::from_millis(16));
        assert_eq!(clock.period(), Duration::from_millis(16));

        let first = clock.tick().await;
        let second = clock.tick().await;
        let third = clock.tick().await;

        assert_eq!(second - first, Duration::from_millis(16));
        assert_eq!(third - second, Duration::from_millis(16));
        assert!(clock.now() >= third);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_clock_zero_period_is_clamped() {
        let clock = IntervalClock::new(Duration::ZERO);
        assert_eq!(clock.period(), Duration::from_millis(1));
    }
}
