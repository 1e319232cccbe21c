use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use swipetabs_core::{AppConfig, StateInput, TabGroup, TabState, Translate};

use crate::input::{Action, GestureTracker};
use crate::theme::Theme;

/// Rows taken by the header: labels plus the indicator underline
pub const HEADER_HEIGHT: u16 = 2;

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub labels: Vec<String>,
    pub gesture: GestureTracker,
    pub header_area: Rect,
    pub content_area: Rect,
    pub status_area: Rect,
    pub should_quit: bool,
    group: TabGroup,
    translate: Translate,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let labels = config.tabs.labels.clone();

        // Pointer deltas arrive in columns, so the fling threshold must too
        let mut group_config = (*config).clone();
        group_config.gesture.fling_velocity = config.ui.fling_velocity_columns(&config.gesture);
        let group = TabGroup::new(labels.len(), &group_config);
        Self {
            config,
            theme: Theme::default(),
            labels,
            gesture: GestureTracker::default(),
            header_area: Rect::default(),
            content_area: Rect::default(),
            status_area: Rect::default(),
            should_quit: false,
            group,
            translate: Translate::default(),
        }
    }

    pub fn state(&self) -> &TabState {
        self.group.state()
    }

    /// Translate currently on screen
    pub fn translate(&self) -> Translate {
        self.translate
    }

    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    /// Split the terminal area and report the content width as tab width
    pub fn set_viewport(&mut self, area: Rect, now: Instant) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let width_changed = rows[1].width != self.content_area.width;
        self.header_area = rows[0];
        self.content_area = rows[1];
        self.status_area = rows[2];

        if width_changed {
            tracing::debug!(width = rows[1].width, "Content area resized");
            self.group
                .dispatch(StateInput::TabWidth(rows[1].width as f64), now);
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectTab(index) => {
                self.group.dispatch(StateInput::RequestedIndex(index), now);
            }
            Action::Gesture(payload) => {
                self.group.dispatch(payload.into(), now);
            }
            Action::None => {}
        }
    }

    /// Advance animation to `now`; returns true if a redraw is needed
    pub fn update(&mut self, now: Instant) -> bool {
        match self.group.tick(now) {
            Some(translate) => {
                self.translate = translate;
                true
            }
            None => false,
        }
    }

    /// Check if the next poll should use the animation frame rate
    pub fn needs_update(&self) -> bool {
        self.group.needs_frame()
    }

    /// Width of one header cell in columns
    pub fn header_cell_width(&self) -> f64 {
        match self.tab_count() {
            0 => 0.0,
            n => self.header_area.width as f64 / n as f64,
        }
    }

    pub fn in_header(&self, column: u16, row: u16) -> bool {
        contains(self.header_area, column, row)
    }

    pub fn in_content(&self, column: u16, row: u16) -> bool {
        contains(self.content_area, column, row)
    }

    /// Tab whose header cell covers `column`
    pub fn tab_at_column(&self, column: u16) -> Option<usize> {
        let cell = self.header_cell_width();
        if cell <= 0.0 || column < self.header_area.x {
            return None;
        }
        let index = ((column - self.header_area.x) as f64 / cell).floor() as usize;
        (index < self.tab_count()).then_some(index)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
