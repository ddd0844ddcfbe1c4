//! Figure assembly: vectors in, complete scene out.

use quiver_scene::{Color, Scene, TextAnchor, Vec2};

use crate::arrow::Arrow;
use crate::axes::AxisBounds;
use crate::legend::{self, LegendEntry};

/// First input vector.
pub const V1: Vec2 = Vec2::new(3.0, 4.0);
/// Second input vector.
pub const V2: Vec2 = Vec2::new(2.0, 1.0);

/// High-end axis margin beyond the largest component.
pub const MARGIN: f32 = 3.0;

const TITLE: &str = "Vector Addition and Subtraction (2D Projection)";

/// A vector addition/subtraction figure.
///
/// Immutable once created; [`Figure::scene`] derives everything else.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Figure {
    v1: Vec2,
    v2: Vec2,
}

impl Figure {
    pub fn new(v1: Vec2, v2: Vec2) -> Self {
        Self { v1, v2 }
    }

    /// The canonical figure for `v1 = [3, 4]`, `v2 = [2, 1]`.
    pub fn demo() -> Self {
        Self::new(V1, V2)
    }

    pub fn v1(&self) -> Vec2 {
        self.v1
    }

    pub fn v2(&self) -> Vec2 {
        self.v2
    }

    /// Component-wise sum `v1 + v2`.
    pub fn sum(&self) -> Vec2 {
        self.v1 + self.v2
    }

    /// Component-wise difference `v1 - v2`.
    pub fn diff(&self) -> Vec2 {
        self.v1 - self.v2
    }

    /// Axis limits covering both inputs and both derived vectors.
    pub fn bounds(&self) -> AxisBounds {
        AxisBounds::from_vectors(&[self.v1, self.v2, self.sum(), self.diff()], MARGIN)
    }

    /// Build the complete scene: frame, arrows, labels, legend, title.
    pub fn scene(&self) -> Scene {
        let sum = self.sum();
        let diff = self.diff();
        let bounds = self.bounds();

        let mut scene = Scene::new();
        scene.set_title(TITLE);
        scene.set_viewbox(bounds.as_rect());

        bounds.emit_frame(&mut scene);

        // The construction arrow first so the main arrows draw over it:
        // from the tip of v2, with direction v1 - v2, ending at the tip
        // of v1.
        Arrow::new(self.v2, diff, Color::MAGENTA)
            .with_alpha(0.3)
            .dashed()
            .tessellate(&mut scene);

        Arrow::new(Vec2::ZERO, self.v1, Color::RED)
            .with_label("v1", TextAnchor::End)
            .tessellate(&mut scene);
        Arrow::new(Vec2::ZERO, self.v2, Color::BLUE)
            .with_label("v2", TextAnchor::Start)
            .tessellate(&mut scene);
        Arrow::new(Vec2::ZERO, sum, Color::GREEN)
            .with_alpha(0.7)
            .with_label("v1+v2", TextAnchor::Start)
            .tessellate(&mut scene);
        Arrow::new(Vec2::ZERO, diff, Color::MAGENTA)
            .with_alpha(0.7)
            .with_label("v1-v2", TextAnchor::Start)
            .tessellate(&mut scene);

        legend::emit(&mut scene, bounds, &self.legend_entries());

        scene
    }

    /// Legend rows for the four labelled arrows; the construction arrow has
    /// no legend entry.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        vec![
            LegendEntry::new(format!("v1 = {}", fmt_vec(self.v1)), Color::RED),
            LegendEntry::new(format!("v2 = {}", fmt_vec(self.v2)), Color::BLUE),
            LegendEntry::new(
                format!("v1 + v2 = {}", fmt_vec(self.sum())),
                Color::GREEN.with_alpha(0.7),
            ),
            LegendEntry::new(
                format!("v1 - v2 = {}", fmt_vec(self.diff())),
                Color::MAGENTA.with_alpha(0.7),
            ),
        ]
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::demo()
    }
}

/// Format a vector like `[3, 4]`, avoiding unnecessary decimals.
pub fn fmt_vec(v: Vec2) -> String {
    format!("[{}, {}]", fmt_num(v.x), fmt_num(v.y))
}

fn fmt_num(n: f32) -> String {
    if n.fract().abs() < 0.0001 {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}
