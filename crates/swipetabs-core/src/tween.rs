//! Tween engine
//!
//! A tween is a lazy, time-ordered sequence of values between two
//! positions: `from + easing(t) * (to - from)`, with `t` the elapsed fraction
//! of the run sampled once per refresh tick. Each tween owns its own
//! sampler, so a new instance never depends on an earlier one.

use std::time::{Duration, Instant};

use crate::clock::FrameClock;
use crate::easing::EasingType;
use crate::timing::{lerp, DurationSampler};

#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    easing: EasingType,
    sampler: DurationSampler,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            easing,
            sampler: DurationSampler::new(start, duration),
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn easing(&self) -> EasingType {
        self.easing
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.sampler.is_exhausted()
    }

    /// Interpolated value at normalized time `t`
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Sample the value for a frame at `now`, `None` once exhausted
    pub fn sample(&mut self, now: Instant) -> Option<f64> {
        let t = self.sampler.sample(now)?;
        Some(self.value_at(t))
    }

    /// Await the next refresh tick and sample it
    pub async fn next_frame<C>(&mut self, clock: &mut C) -> Option<f64>
    where
        C: FrameClock + ?Sized,
    {
        if self.is_finished() {
            return None;
        }
        let now = clock.tick().await;
        self.sample(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::IntervalClock;

    fn collect(mut tween: Tween, start: Instant, frame_ms: u64) -> Vec<f64> {
        let mut values = Vec::new();
        let mut now = start;
        while let Some(v) = tween.sample(now) {
            values.push(v);
            now += Duration::from_millis(frame_ms);
        }
        values
    }

    #[test]
    fn test_cubic_tween_is_bounded_and_monotonic() {
        for (a, b) in [(0.5, 1.0), (2.0, 0.0), (-0.3, 0.0)] {
            let start = Instant::now();
            let tween = Tween::new(a, b, start, Duration::from_millis(200), EasingType::CubicInOut);
            let values = collect(tween, start, 16);

            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            assert!(values.iter().all(|v| (lo..=hi).contains(v)), "{:?}", values);
            if a < b {
                assert!(values.windows(2).all(|w| w[1] >= w[0]));
            } else {
                assert!(values.windows(2).all(|w| w[1] <= w[0]));
            }
            assert_eq!(values.first().copied(), Some(a));
            assert_eq!(values.last().copied(), Some(b));
        }
    }

    #[test]
    fn test_tween_frame_count() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1.0, start, Duration::from_millis(200), EasingType::Linear);
        // 0, 16, ..., 192 then one clamped frame at 208
        assert_eq!(collect(tween, start, 16).len(), 14);
    }

    #[test]
    fn test_elastic_tween_overshoots_target() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1.0, start, Duration::from_millis(1000), EasingType::ElasticInOut);
        let values = collect(tween, start, 5);
        assert!(values.iter().any(|&v| v > 1.0));
        assert_eq!(values.last().copied(), Some(1.0));
    }

    #[test]
    fn test_exhausted_tween_stays_exhausted() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0, 1.0, start, Duration::from_millis(10), EasingType::CubicInOut);
        assert_eq!(tween.sample(start + Duration::from_millis(20)), Some(1.0));
        assert!(tween.is_finished());
        assert_eq!(tween.sample(start + Duration::from_millis(30)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_frame_follows_clock() {
        let mut clock = IntervalClock::new(Duration::from_millis(20));
        let mut tween = Tween::new(
            1.0,
            3.0,
            clock.now(),
            Duration::from_millis(100),
            EasingType::Linear,
        );

        let mut values = Vec::new();
        while let Some(v) = tween.next_frame(&mut clock).await {
            values.push(v);
        }

        assert_eq!(values.len(), 6);
        assert!((values[1] - 1.4).abs() < 1e-9);
        assert_eq!(values.last().copied(), Some(3.0));
        assert!(tween.next_frame(&mut clock).await.is_none());
    }
}
