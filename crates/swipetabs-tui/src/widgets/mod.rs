mod content;
mod header;
mod status_bar;

pub use content::{pane_span, ContentWidget, PaneSpan};
pub use header::HeaderWidget;
pub use status_bar::StatusBarWidget;
