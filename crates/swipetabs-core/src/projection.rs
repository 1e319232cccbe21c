//! Output projection
//!
//! Derives the translate values a renderer consumes from the animated
//! position.

use serde::{Deserialize, Serialize};

/// Translate values for one refresh tick, in tab-index units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translate {
    /// Content strip offset; may overshoot under elastic easing
    pub content: f64,
    /// Header indicator offset, always within `[0, tab_count - 1]`
    pub indicator: f64,
}

impl Translate {
    /// Horizontal pixel offset of the content strip
    #[inline]
    pub fn content_offset_px(&self, host_width: f64) -> f64 {
        -self.content * host_width
    }

    /// Horizontal pixel offset of the header indicator
    #[inline]
    pub fn indicator_offset_px(&self, header_width: f64) -> f64 {
        self.indicator * header_width
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    max_index: f64,
}

impl Projection {
    pub fn new(tab_count: usize) -> Self {
        Self {
            max_index: tab_count.saturating_sub(1) as f64,
        }
    }

    pub fn project(&self, value: f64) -> Translate {
        Translate {
            content: value,
            indicator: value.clamp(0.0, self.max_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_is_clamped() {
        let projection = Projection::new(3);
        assert_eq!(projection.project(-0.2), Translate { content: -0.2, indicator: 0.0 });
        assert_eq!(projection.project(1.4), Translate { content: 1.4, indicator: 1.4 });
        assert_eq!(projection.project(2.3), Translate { content: 2.3, indicator: 2.0 });
    }

    #[test]
    fn test_single_tab_pins_indicator() {
        let projection = Projection::new(1);
        assert_eq!(projection.project(0.6).indicator, 0.0);
    }

    #[test]
    fn test_pixel_offsets() {
        let translate = Translate { content: 1.5, indicator: 1.5 };
        assert_eq!(translate.content_offset_px(300.0), -450.0);
        assert_eq!(translate.indicator_offset_px(80.0), 120.0);
    }
}
