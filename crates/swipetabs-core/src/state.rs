//! Tab group state
//!
//! ```text
//! tab_width ──┐
//! requested ──┼──> reduce ──> TabState ──> driver ──> projection
//! pan ────────┘
//! ```
//!
//! A `TabState` is replaced wholesale on every transition; consumers only
//! ever see complete values.

use serde::{Deserialize, Serialize};

use crate::gesture::{GesturePayload, PanEvent};

/// One tagged input folded into the state by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateInput {
    /// Measured container width in pixels
    TabWidth(f64),
    /// Explicit navigation request
    RequestedIndex(usize),
    /// Gesture update
    Pan(PanEvent),
}

impl From<PanEvent> for StateInput {
    fn from(pan: PanEvent) -> Self {
        StateInput::Pan(pan)
    }
}

impl From<GesturePayload> for StateInput {
    fn from(payload: GesturePayload) -> Self {
        StateInput::Pan(payload.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabState {
    /// Tab the group rests on
    pub active_index: usize,
    /// Number of tabs, fixed for the lifetime of the group
    pub tab_count: usize,
    /// Continuous position in tab-index units
    pub position: f64,
    /// Last measured width, `None` until measured
    pub tab_width: Option<f64>,
    /// Whether the transition into this state should be interpolated
    pub animating: bool,
}

impl TabState {
    pub fn new(tab_count: usize) -> Self {
        Self {
            active_index: 0,
            tab_count,
            position: 0.0,
            tab_width: None,
            animating: false,
        }
    }

    /// Highest valid index
    #[inline]
    pub fn max_index(&self) -> usize {
        self.tab_count.saturating_sub(1)
    }

    /// Clamp an index into `[0, tab_count - 1]`
    #[inline]
    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.max_index() as i64) as usize
    }

    /// Width usable for pan arithmetic
    ///
    /// Zero, negative and non-finite measurements count as unknown.
    pub fn measured_width(&self) -> Option<f64> {
        self.tab_width.filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Whether the driver has anything to do for the transition `self -> next`
    pub fn moves_to(&self, next: &TabState) -> bool {
        self.position != next.position || self.animating != next.animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = TabState::new(3);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.tab_width, None);
        assert!(!state.animating);
        assert_eq!(state.max_index(), 2);
    }

    #[test]
    fn test_clamp_index() {
        let state = TabState::new(3);
        assert_eq!(state.clamp_index(-4), 0);
        assert_eq!(state.clamp_index(1), 1);
        assert_eq!(state.clamp_index(9), 2);

        let empty = TabState::new(0);
        assert_eq!(empty.clamp_index(5), 0);
    }

    #[test]
    fn test_measured_width_rejects_degenerate_values() {
        let mut state = TabState::new(3);
        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            state.tab_width = Some(width);
            assert_eq!(state.measured_width(), None, "{}", width);
        }
        state.tab_width = Some(320.0);
        assert_eq!(state.measured_width(), Some(320.0));
    }

    #[test]
    fn test_state_input_json_shape() {
        let inputs: Vec<StateInput> = serde_json::from_str(
            r#"[
                {"tab_width": 300},
                {"requested_index": 2},
                {"pan": {"position": -150.0, "velocity": 0.0, "is_panning": true}}
            ]"#,
        )
        .unwrap();

        assert_eq!(inputs[0], StateInput::TabWidth(300.0));
        assert_eq!(inputs[1], StateInput::RequestedIndex(2));
        assert_eq!(
            inputs[2],
            StateInput::Pan(PanEvent {
                position: -150.0,
                velocity: 0.0,
                is_panning: true,
            })
        );
    }
}
