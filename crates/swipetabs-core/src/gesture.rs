//! Pan gestures and release snapping
//!
//! Sign convention: a negative pan position means the content was dragged
//! left, which moves the group forward (towards higher indices).
//!
//! A distance-based move follows the drag position. A fling that forces a
//! move off a short drag follows the release velocity instead, so a drag
//! left that is flicked back to the right moves backward.

use serde::{Deserialize, Serialize};

use crate::state::TabState;

/// Release velocity (px/ms) above which a short drag still changes tab
pub const DEFAULT_FLING_VELOCITY: f64 = 0.5;

/// A drag update, relative to where the gesture started
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanEvent {
    /// Pixel delta from the gesture start
    pub position: f64,
    /// Pixels per millisecond
    pub velocity: f64,
    /// True while the pointer is down
    pub is_panning: bool,
}

/// Payload shape produced by the gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GesturePayload {
    pub delta_x: f64,
    pub velocity_x: f64,
    pub is_final: bool,
}

impl From<GesturePayload> for PanEvent {
    fn from(payload: GesturePayload) -> Self {
        Self {
            position: payload.delta_x,
            velocity: payload.velocity_x,
            is_panning: !payload.is_final,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices
    Forward,
    /// Towards lower indices
    Backward,
}

impl Direction {
    fn from_sign(value: f64) -> Option<Self> {
        if value < 0.0 {
            Some(Direction::Forward)
        } else if value > 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    #[inline]
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl PanEvent {
    /// Direction of the gesture
    ///
    /// Taken from the drag position; a drag that ends where it started
    /// falls back to the sign of the velocity.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_sign(self.position).or_else(|| Direction::from_sign(self.velocity))
    }

    /// Direction of a fling: the velocity sign, then the drag position
    pub fn fling_direction(&self) -> Option<Direction> {
        Direction::from_sign(self.velocity).or_else(|| Direction::from_sign(self.position))
    }

    /// Whether the release velocity exceeds `threshold`
    #[inline]
    pub fn is_fling(&self, threshold: f64) -> bool {
        self.velocity.abs() > threshold
    }
}

/// Converts a released pan into the tab it should settle on
#[derive(Debug, Clone, Copy)]
pub struct IndexResolver {
    pub fling_velocity: f64,
}

impl Default for IndexResolver {
    fn default() -> Self {
        Self {
            fling_velocity: DEFAULT_FLING_VELOCITY,
        }
    }
}

impl IndexResolver {
    pub fn new(fling_velocity: f64) -> Self {
        Self { fling_velocity }
    }

    /// Target index for a completed pan
    ///
    /// Without a usable width the group stays on its active tab.
    pub fn resolve(&self, pan: &PanEvent, state: &TabState) -> usize {
        let Some(width) = state.measured_width() else {
            return state.active_index;
        };

        // Past half a tab's width counts as a whole tab. Never more than
        // the group holds, so huge drags still clamp instead of overflowing.
        let moved_tabs = ((pan.position.abs() + width / 2.0) / width)
            .floor()
            .min(state.tab_count as f64) as i64;
        let active = state.active_index as i64;

        let direction = if moved_tabs == 0 && pan.is_fling(self.fling_velocity) {
            pan.fling_direction().map(|d| (d, 1))
        } else {
            pan.direction().map(|d| (d, moved_tabs))
        };
        let target = match direction {
            Some((direction, tabs)) => active.saturating_add(direction.step().saturating_mul(tabs)),
            None => active,
        };

        state.clamp_index(target)
    }
}

/// Resolve with the default fling threshold
pub fn resolve_index(pan: &PanEvent, state: &TabState) -> usize {
    IndexResolver::default().resolve(pan, state)
}
