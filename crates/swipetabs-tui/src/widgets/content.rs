use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Visible part of one pane inside the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneSpan {
    /// Column offset from the content area's left edge
    pub x: u16,
    pub width: u16,
    /// Columns of the pane cut off on its left side
    pub hidden: u16,
}

/// Where pane `index` lands when the strip is shifted by `offset` columns
pub fn pane_span(index: usize, width: u16, offset: f64) -> Option<PaneSpan> {
    if width == 0 || !offset.is_finite() {
        return None;
    }
    let w = width as i64;
    let start = (index as f64 * width as f64 + offset).round() as i64;
    let left = start.max(0);
    let right = (start + w).min(w);
    if right <= left {
        return None;
    }
    Some(PaneSpan {
        x: left as u16,
        width: (right - left) as u16,
        hidden: (left - start) as u16,
    })
}

pub struct ContentWidget;

impl ContentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.translate().content_offset_px(area.width as f64);

        for (index, label) in app.labels.iter().enumerate() {
            let Some(span) = pane_span(index, area.width, offset) else {
                continue;
            };
            let bg = app.theme.pane_bg(index);
            let pane = Rect {
                x: area.x + span.x,
                y: area.y,
                width: span.width,
                height: area.height,
            };

            let mut lines = vec![Line::default(); (area.height / 2).saturating_sub(1) as usize];
            lines.push(centered(
                label,
                area.width,
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(centered(
                &format!("{} / {}", index + 1, app.labels.len()),
                area.width,
                Style::default().fg(app.theme.grey2),
            ));

            let paragraph = Paragraph::new(lines)
                .style(Style::default().bg(bg))
                .scroll((0, span.hidden));
            frame.render_widget(paragraph, pane);
        }
    }
}

/// Pad `text` so it sits in the middle of a `width` wide pane
fn centered(text: &str, width: u16, style: Style) -> Line<'static> {
    let len = text.chars().count() as u16;
    let pad = width.saturating_sub(len) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad as usize)),
        Span::styled(text.to_string(), style),
    ])
}
