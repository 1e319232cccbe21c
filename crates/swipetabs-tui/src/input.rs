use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use swipetabs_core::GesturePayload;

use crate::app::App;

/// A release this long after the last movement carries no velocity
const REST_BEFORE_RELEASE: Duration = Duration::from_millis(60);

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Header click on a tab
    SelectTab(usize),
    /// Gesture recognizer update for the content area
    Gesture(GesturePayload),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        _ => Action::None,
    }
}

/// Handle a mouse event: header clicks select, content drags pan
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App, now: Instant) -> Action {
    let column = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.in_header(column, row) {
                app.tab_at_column(column)
                    .map(Action::SelectTab)
                    .unwrap_or(Action::None)
            } else {
                if app.in_content(column, row) {
                    app.gesture.press(column, now);
                }
                Action::None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app
            .gesture
            .drag(column, now)
            .map(Action::Gesture)
            .unwrap_or(Action::None),
        MouseEventKind::Up(MouseButton::Left) => app
            .gesture
            .release(column, now)
            .map(Action::Gesture)
            .unwrap_or(Action::None),
        _ => Action::None,
    }
}

/// Turns raw pointer samples into recognizer payloads
///
/// Deltas are in terminal columns relative to the press; velocity is in
/// columns per millisecond over the most recent movement.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    origin: Option<u16>,
    last: Option<(u16, Instant)>,
    velocity: f64,
}

impl GestureTracker {
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn press(&mut self, column: u16, now: Instant) {
        self.origin = Some(column);
        self.last = Some((column, now));
        self.velocity = 0.0;
    }

    pub fn drag(&mut self, column: u16, now: Instant) -> Option<GesturePayload> {
        let origin = self.origin?;
        self.sample(column, now);
        Some(GesturePayload {
            delta_x: column as f64 - origin as f64,
            velocity_x: self.velocity,
            is_final: false,
        })
    }

    pub fn release(&mut self, column: u16, now: Instant) -> Option<GesturePayload> {
        let origin = self.origin.take()?;
        self.sample(column, now);
        let payload = GesturePayload {
            delta_x: column as f64 - origin as f64,
            velocity_x: self.velocity,
            is_final: true,
        };
        self.last = None;
        self.velocity = 0.0;
        Some(payload)
    }

    fn sample(&mut self, column: u16, now: Instant) {
        if let Some((last_column, last_time)) = self.last {
            let elapsed = now.saturating_duration_since(last_time);
            if column != last_column {
                let ms = elapsed.as_secs_f64() * 1000.0;
                if ms > 0.0 {
                    self.velocity = (column as f64 - last_column as f64) / ms;
                }
            } else if elapsed > REST_BEFORE_RELEASE {
                self.velocity = 0.0;
            }
            if column == last_column && elapsed.is_zero() {
                return;
            }
        }
        self.last = Some((column, now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_reports_delta_from_press() {
        let mut tracker = GestureTracker::default();
        let start = Instant::now();
        assert!(tracker.drag(10, start).is_none());

        tracker.press(40, start);
        let payload = tracker.drag(30, start + Duration::from_millis(20)).unwrap();
        assert_eq!(payload.delta_x, -10.0);
        assert!((payload.velocity_x + 0.5).abs() < 1e-9);
        assert!(!payload.is_final);
    }

    #[test]
    fn test_release_is_final_and_resets() {
        let mut tracker = GestureTracker::default();
        let start = Instant::now();
        tracker.press(40, start);
        tracker.drag(35, start + Duration::from_millis(10));

        let payload = tracker.release(20, start + Duration::from_millis(20)).unwrap();
        assert_eq!(payload.delta_x, -20.0);
        assert!((payload.velocity_x + 1.5).abs() < 1e-9);
        assert!(payload.is_final);
        assert!(!tracker.is_active());
        assert!(tracker.release(20, start + Duration::from_millis(30)).is_none());
    }

    #[test]
    fn test_resting_before_release_drops_velocity() {
        let mut tracker = GestureTracker::default();
        let start = Instant::now();
        tracker.press(40, start);
        tracker.drag(20, start + Duration::from_millis(10));

        let payload = tracker.release(20, start + Duration::from_millis(300)).unwrap();
        assert_eq!(payload.velocity_x, 0.0);
    }

    #[test]
    fn test_quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let other = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handle_key_event(q), Action::Quit);
        assert_eq!(handle_key_event(ctrl_c), Action::Quit);
        assert_eq!(handle_key_event(other), Action::None);
    }
}
