//! Axis bounds and the Cartesian frame (grid, axis lines, axis labels).

use quiver_scene::{Color, Rect, Scene, Stroke, TextAnchor, Vec2};

/// Fixed padding below the smallest displayed component.
pub const LOWER_PAD: f32 = 2.0;

const AXIS_LABEL_SIZE: f32 = 10.0;

/// Axis limits of the plot, in data coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl AxisBounds {
    /// Compute axis limits covering all vector tips (and the origin the
    /// arrows start from).
    ///
    /// Per axis the low end is the smallest component (or zero, whichever is
    /// lower) minus [`LOWER_PAD`], and the high end is the largest component
    /// plus `margin`. Every component therefore lies strictly inside the
    /// bounds.
    pub fn from_vectors(vectors: &[Vec2], margin: f32) -> Self {
        let mut extent = Rect::EMPTY;
        extent.include(Vec2::ZERO);
        for v in vectors {
            extent.include(*v);
        }

        Self {
            x_min: extent.min.x.min(0.0) - LOWER_PAD,
            x_max: extent.max.x + margin,
            y_min: extent.min.y.min(0.0) - LOWER_PAD,
            y_max: extent.max.y + margin,
        }
    }

    pub fn as_rect(self) -> Rect {
        Rect::from_bounds(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    pub fn contains(self, p: Vec2) -> bool {
        self.as_rect().contains(p)
    }

    /// Emit the Cartesian frame into a scene: grid lines at integer steps,
    /// axis lines through the origin, and axis labels.
    pub fn emit_frame(self, scene: &mut Scene) {
        let grid = Stroke::new(Color::GRAY, 0.5);
        let axis = Stroke::new(Color::WHITE, 1.0);

        // Grid at integer steps; the two zero lines are drawn as axes below.
        for x in (self.x_min.ceil() as i32)..=(self.x_max.floor() as i32) {
            if x == 0 {
                continue;
            }
            let x = x as f32;
            scene.add_line(Vec2::new(x, self.y_min), Vec2::new(x, self.y_max), grid);
        }
        for y in (self.y_min.ceil() as i32)..=(self.y_max.floor() as i32) {
            if y == 0 {
                continue;
            }
            let y = y as f32;
            scene.add_line(Vec2::new(self.x_min, y), Vec2::new(self.x_max, y), grid);
        }

        scene.add_line(
            Vec2::new(self.x_min, 0.0),
            Vec2::new(self.x_max, 0.0),
            axis,
        );
        scene.add_line(
            Vec2::new(0.0, self.y_min),
            Vec2::new(0.0, self.y_max),
            axis,
        );

        scene.add_text(
            Vec2::new(self.x_max - 0.2, -0.7),
            "X-axis",
            AXIS_LABEL_SIZE,
            Color::GRAY,
            TextAnchor::End,
        );
        scene.add_text(
            Vec2::new(0.3, self.y_max - 0.2),
            "Y-axis",
            AXIS_LABEL_SIZE,
            Color::GRAY,
            TextAnchor::Start,
        );
    }
}
