//! Tab group engine
//!
//! Combines reducer, animation driver and projection. Inputs are folded one
//! at a time with `dispatch()`; `tick()` is called once per display refresh
//! and yields at most one `Translate`.
//!
//! The engine never reads the wall clock itself, every call carries its
//! own timestamp.

use std::time::Instant;

use tracing::trace;

use crate::config::AppConfig;
use crate::driver::AnimationDriver;
use crate::projection::{Projection, Translate};
use crate::reducer::Reducer;
use crate::state::{StateInput, TabState};

#[derive(Debug, Clone)]
pub struct TabGroup {
    reducer: Reducer,
    state: TabState,
    driver: AnimationDriver,
    projection: Projection,
    last_emitted: Option<Translate>,
}

impl TabGroup {
    pub fn new(tab_count: usize, config: &AppConfig) -> Self {
        Self {
            reducer: Reducer::new(&config.gesture),
            state: TabState::new(tab_count),
            driver: AnimationDriver::new(config.animation.clone()),
            projection: Projection::new(tab_count),
            last_emitted: None,
        }
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    /// Last translate handed out by `tick()`
    pub fn translate(&self) -> Translate {
        self.last_emitted.unwrap_or_default()
    }

    /// Check if a refresh tick would make progress
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.driver.needs_frame()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Fold one input into the state
    ///
    /// Transitions that change neither position nor the animating flag do
    /// not reach the driver, so they leave a running tween alone.
    pub fn dispatch(&mut self, input: StateInput, now: Instant) -> &TabState {
        let next = self.reducer.reduce(&self.state, input);
        if self.state.moves_to(&next) || self.driver.target().is_none() {
            self.driver.push(&next, now);
        }
        self.state = next;
        &self.state
    }

    /// Advance one refresh tick
    ///
    /// Returns `None` when nothing changed since the last emission.
    pub fn tick(&mut self, now: Instant) -> Option<Translate> {
        let value = self.driver.frame(now)?;
        let translate = self.projection.project(value);
        if self.last_emitted == Some(translate) {
            return None;
        }
        trace!(content = translate.content, indicator = translate.indicator, "Emit translate");
        self.last_emitted = Some(translate);
        Some(translate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::PanEvent;
    use std::time::Duration;

    fn pan(position: f64, velocity: f64, is_panning: bool) -> StateInput {
        StateInput::Pan(PanEvent {
            position,
            velocity,
            is_panning,
        })
    }

    fn run_frames(group: &mut TabGroup, start: Instant, frames: u32) -> Vec<Translate> {
        (0..frames)
            .filter_map(|i| group.tick(start + Duration::from_millis(16 * i as u64)))
            .collect()
    }

    #[test]
    fn test_inputs_between_ticks_are_coalesced() {
        let mut group = TabGroup::new(3, &AppConfig::default());
        let now = Instant::now();
        group.dispatch(StateInput::TabWidth(300.0), now);
        group.tick(now);

        group.dispatch(pan(-30.0, 0.0, true), now);
        group.dispatch(pan(-60.0, 0.0, true), now);
        group.dispatch(pan(-90.0, 0.0, true), now);

        let emitted = run_frames(&mut group, now, 3);
        assert_eq!(emitted.len(), 1);
        assert!((emitted[0].content - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_identical_output_is_suppressed() {
        let mut group = TabGroup::new(3, &AppConfig::default());
        let now = Instant::now();
        group.dispatch(StateInput::TabWidth(300.0), now);
        assert_eq!(group.tick(now), Some(Translate::default()));

        group.dispatch(pan(0.0, 0.0, true), now);
        assert_eq!(group.tick(now), None);
    }

    #[test]
    fn test_scenario_release_tweens_to_next_tab() {
        let mut group = TabGroup::new(3, &AppConfig::default());
        let start = Instant::now();

        group.dispatch(StateInput::TabWidth(300.0), start);
        group.dispatch(pan(-150.0, 0.0, true), start);
        assert_eq!(group.tick(start).map(|t| t.content), Some(0.5));

        let state = *group.dispatch(pan(-170.0, 0.2, false), start);
        assert_eq!(state.active_index, 1);
        assert!(state.animating);
        assert!(group.is_animating());

        let frames = run_frames(&mut group, start, 20);
        let contents: Vec<f64> = frames.iter().map(|t| t.content).collect();
        // First frame lands on the start value, already emitted
        assert!(contents.iter().all(|v| (0.5..=1.0).contains(v)));
        assert!(contents.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(contents.last().copied(), Some(1.0));
        assert!(!group.needs_frame());
    }

    #[test]
    fn test_width_measurement_does_not_disturb_tween() {
        let mut group = TabGroup::new(3, &AppConfig::default());
        let start = Instant::now();
        group.dispatch(StateInput::TabWidth(300.0), start);
        group.tick(start);
        group.dispatch(StateInput::RequestedIndex(2), start);
        group.tick(start + Duration::from_millis(16));

        group.dispatch(StateInput::TabWidth(310.0), start + Duration::from_millis(20));
        assert!(group.is_animating());

        let frames = run_frames(&mut group, start + Duration::from_millis(32), 20);
        assert_eq!(frames.last().map(|t| t.content), Some(2.0));
    }

    #[test]
    fn test_repeated_request_keeps_running_tween() {
        let mut group = TabGroup::new(3, &AppConfig::default());
        let start = Instant::now();
        group.dispatch(StateInput::TabWidth(300.0), start);
        group.tick(start);
        group.dispatch(StateInput::RequestedIndex(2), start);
        group.tick(start + Duration::from_millis(16));
        let mid = group.tick(start + Duration::from_millis(100)).unwrap();

        group.dispatch(StateInput::RequestedIndex(2), start + Duration::from_millis(110));
        let next = group.tick(start + Duration::from_millis(116)).unwrap();
        assert!(next.content > mid.content && next.content < 2.0);
    }

    #[test]
    fn test_elastic_overshoot_keeps_indicator_in_range() {
        let mut config = AppConfig::default();
        config.animation.easing = crate::easing::EasingType::ElasticInOut;
        config.animation.duration_ms = 1000;

        let mut group = TabGroup::new(2, &config);
        let start = Instant::now();
        group.dispatch(StateInput::TabWidth(300.0), start);
        group.tick(start);
        group.dispatch(StateInput::RequestedIndex(1), start);

        let frames: Vec<Translate> = (0..250)
            .filter_map(|i| group.tick(start + Duration::from_millis(5 * i)))
            .collect();
        assert!(frames.iter().any(|t| t.content > 1.0));
        assert!(frames.iter().all(|t| (0.0..=1.0).contains(&t.indicator)));
        assert_eq!(group.translate().content, 1.0);
    }
}
