use ratatui::style::Color;

/// Runtime theme colors (Gruvbox dark)
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey2: Color,

    // Semantic colors
    pub active: Color,
    pub indicator: Color,
    /// Pane backgrounds, cycled by tab index
    pub panes: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            active: Color::Rgb(0xd8, 0xa6, 0x57),
            indicator: Color::Rgb(0x7d, 0xae, 0xa3),
            panes: [
                Color::Rgb(0x32, 0x30, 0x2f),
                Color::Rgb(0x3c, 0x38, 0x36),
                Color::Rgb(0x2a, 0x2f, 0x2d),
            ],
        }
    }
}

impl Theme {
    pub fn pane_bg(&self, index: usize) -> Color {
        self.panes[index % self.panes.len()]
    }
}
