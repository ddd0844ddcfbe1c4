//! Stroke and text styles.

use crate::types::Color;

/// Line style for strokes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum LineStyle {
    #[default]
    Solid,
    /// Dashed, with on/off run lengths in scene units.
    Dashed { on: f32, off: f32 },
}

impl LineStyle {
    /// Dashed with the default pattern.
    pub const fn dashed() -> Self {
        LineStyle::Dashed { on: 0.35, off: 0.25 }
    }
}

/// Stroke style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: 1.0,
            style: LineStyle::Solid,
        }
    }
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text begins at the position.
    #[default]
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}
