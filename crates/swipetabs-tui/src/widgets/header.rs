use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Indicator glyph drawn under the active header cell
const INDICATOR: &str = "▔";

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 || app.labels.is_empty() {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                app.labels
                    .iter()
                    .map(|_| Constraint::Ratio(1, app.labels.len() as u32))
                    .collect::<Vec<_>>(),
            )
            .split(rows[0]);

        let active = app.state().active_index;
        for (index, (label, cell)) in app.labels.iter().zip(cells.iter()).enumerate() {
            let style = if index == active {
                Style::default()
                    .fg(app.theme.active)
                    .bg(app.theme.bg1)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.grey2).bg(app.theme.bg1)
            };
            let paragraph = Paragraph::new(Line::from(Span::styled(label.clone(), style)))
                .alignment(Alignment::Center)
                .style(Style::default().bg(app.theme.bg1));
            frame.render_widget(paragraph, *cell);
        }

        if rows.len() > 1 && rows[1].height > 0 {
            let line = indicator_line(app, rows[1].width);
            frame.render_widget(
                Paragraph::new(line).style(Style::default().bg(app.theme.bg0)),
                rows[1],
            );
        }
    }
}

/// Underline of one cell width, shifted by the indicator translate
fn indicator_line(app: &App, width: u16) -> Line<'static> {
    let cell = app.header_cell_width();
    let start = app
        .translate()
        .indicator_offset_px(cell)
        .round()
        .clamp(0.0, width as f64) as u16;
    let len = (cell.round() as u16).min(width.saturating_sub(start));

    Line::from(vec![
        Span::raw(" ".repeat(start as usize)),
        Span::styled(
            INDICATOR.repeat(len as usize),
            Style::default().fg(app.theme.indicator),
        ),
    ])
}
