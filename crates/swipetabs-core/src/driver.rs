//! Animation driver
//!
//! Watches consecutive states from the reducer. An animating transition
//! starts a tween from the previous position to the new one; any other
//! transition passes the new position straight through.
//!
//! Each pushed state bumps a generation counter. A running tween carries
//! the generation it was started under and never emits once a newer state
//! has been pushed.

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::AnimationConfig;
use crate::state::TabState;
use crate::tween::Tween;

#[derive(Debug, Clone)]
struct ActiveTween {
    generation: u64,
    tween: Tween,
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    config: AnimationConfig,
    previous: Option<f64>,
    generation: u64,
    active: Option<ActiveTween>,
    pending: Option<f64>,
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            previous: None,
            generation: 0,
            active: None,
            pending: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if a tween is running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Check if the next frame will produce a value
    /// Use this to decide whether to wait for a refresh tick
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.pending.is_some() || self.active.is_some()
    }

    /// Final position the driver is heading to
    pub fn target(&self) -> Option<f64> {
        self.active
            .as_ref()
            .map(|a| a.tween.to())
            .or(self.pending)
            .or(self.previous)
    }

    /// Feed the next state, superseding any running tween
    pub fn push(&mut self, next: &TabState, now: Instant) {
        self.generation += 1;

        if let Some(stale) = self.active.take() {
            debug!(
                generation = stale.generation,
                target = stale.tween.to(),
                "Cancelled running tween"
            );
        }

        match self.previous {
            Some(from) if next.animating && self.config.is_smooth() => {
                debug!(
                    generation = self.generation,
                    from,
                    to = next.position,
                    "Starting tween"
                );
                self.pending = None;
                self.active = Some(ActiveTween {
                    generation: self.generation,
                    tween: Tween::new(
                        from,
                        next.position,
                        now,
                        self.config.duration(),
                        self.config.easing,
                    ),
                });
            }
            _ => self.pending = Some(next.position),
        }

        self.previous = Some(next.position);
    }

    /// Advance one refresh tick, returning the value to show if any
    pub fn frame(&mut self, now: Instant) -> Option<f64> {
        if let Some(value) = self.pending.take() {
            trace!(value, "Pass-through frame");
            return Some(value);
        }

        let active = self.active.as_mut()?;
        if active.generation != self.generation {
            self.active = None;
            return None;
        }

        let value = active.tween.sample(now);
        if active.tween.is_finished() {
            self.active = None;
        }
        if let Some(value) = value {
            trace!(value, generation = self.generation, "Tween frame");
        }
        value
    }
}
