//! State reducer
//!
//! Folds one `StateInput` into a `TabState`, returning a new value. The
//! reducer is total: degenerate inputs are clamped or ignored, never
//! rejected.

use tracing::debug;

use crate::config::GestureConfig;
use crate::gesture::{IndexResolver, PanEvent};
use crate::state::{StateInput, TabState};

#[derive(Debug, Clone, Copy, Default)]
pub struct Reducer {
    resolver: IndexResolver,
}

impl Reducer {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            resolver: IndexResolver::new(config.fling_velocity),
        }
    }

    pub fn reduce(&self, state: &TabState, input: StateInput) -> TabState {
        match input {
            StateInput::TabWidth(width) => TabState {
                tab_width: Some(width),
                ..*state
            },
            StateInput::RequestedIndex(index) => Self::snap_to(state, index),
            StateInput::Pan(pan) => self.pan(state, &pan),
        }
    }

    fn snap_to(state: &TabState, index: usize) -> TabState {
        let index = state.clamp_index(index.min(i64::MAX as usize) as i64);
        if index != state.active_index {
            debug!(from = state.active_index, to = index, "Active tab changed");
        }

        TabState {
            active_index: index,
            position: index as f64,
            animating: true,
            ..*state
        }
    }

    fn pan(&self, state: &TabState, pan: &PanEvent) -> TabState {
        let Some(width) = state.measured_width() else {
            debug!(position = pan.position, "Ignoring pan before width is known");
            return *state;
        };
        if !pan.position.is_finite() {
            debug!("Ignoring pan with non-finite position");
            return *state;
        }

        if pan.is_panning {
            TabState {
                position: state.active_index as f64 - pan.position / width,
                animating: false,
                ..*state
            }
        } else {
            let index = self.resolver.resolve(pan, state);
            Self::snap_to(state, index)
        }
    }
}

/// Reduce with the default gesture settings
pub fn reduce(state: &TabState, input: StateInput) -> TabState {
    Reducer::default().reduce(state, input)
}
