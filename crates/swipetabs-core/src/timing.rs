//! Time calculation utilities for tab animations
//!
//! Provides the per-run duration sampler and interpolation helpers.

use std::time::{Duration, Instant};

/// Elapsed fraction of `duration` since `start`, not clamped
#[inline]
pub fn elapsed_fraction(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    elapsed.as_secs_f64() / duration.as_secs_f64()
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Produces elapsed-time fractions for one animation run
///
/// Every sample lies in [0, 1]. The first sample taken at or past the end
/// of the run is exactly `1.0`; afterwards the sampler is exhausted.
#[derive(Debug, Clone)]
pub struct DurationSampler {
    start: Instant,
    duration: Duration,
    exhausted: bool,
}

impl DurationSampler {
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self {
            start,
            duration,
            exhausted: false,
        }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Sample the fraction for a frame at `now`
    pub fn sample(&mut self, now: Instant) -> Option<f64> {
        if self.exhausted {
            return None;
        }

        let t = elapsed_fraction(self.start, now, self.duration);
        if t >= 1.0 {
            self.exhausted = true;
            Some(1.0)
        } else {
            Some(t.max(0.0))
        }
    }
}
