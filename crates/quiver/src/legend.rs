//! Legend layout.

use quiver_scene::{Color, LineStyle, Scene, Stroke, TextAnchor, Vec2};

use crate::axes::AxisBounds;

const SWATCH_LEN: f32 = 0.8;
const ROW_STEP: f32 = 0.8;
const INSET: f32 = 0.4;
const ENTRY_SIZE: f32 = 10.0;

/// One legend row: a colored swatch line and its caption.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub caption: String,
    pub color: Color,
    pub style: LineStyle,
}

impl LegendEntry {
    pub fn new(caption: impl Into<String>, color: Color) -> Self {
        Self {
            caption: caption.into(),
            color,
            style: LineStyle::Solid,
        }
    }
}

/// Emit legend rows into the upper-left corner of the plot area.
///
/// Layout happens in data coordinates so every backend places the legend the
/// same way relative to the axes.
pub fn emit(scene: &mut Scene, bounds: AxisBounds, entries: &[LegendEntry]) {
    let x = bounds.x_min + INSET;
    let mut y = bounds.y_max - INSET;

    for entry in entries {
        let stroke = Stroke::new(entry.color, 1.0).with_style(entry.style);
        scene.add_line(Vec2::new(x, y), Vec2::new(x + SWATCH_LEN, y), stroke);
        scene.add_text(
            Vec2::new(x + SWATCH_LEN + 0.3, y),
            entry.caption.clone(),
            ENTRY_SIZE,
            entry.color,
            TextAnchor::Start,
        );
        y -= ROW_STEP;
    }
}
