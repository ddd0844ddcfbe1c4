//! Arrow primitive and tessellation.

use quiver_scene::{Color, LineStyle, Scene, Stroke, TextAnchor, Vec2};

/// Length of the arrowhead along the shaft, in scene units.
const HEAD_LENGTH: f32 = 0.45;
/// Half-width of the arrowhead base, in scene units.
const HEAD_HALF_WIDTH: f32 = 0.18;
/// How far tip labels are nudged off the arrow tip.
const LABEL_OFFSET: f32 = 0.3;
/// Font size passed through to the backend for tip labels.
const LABEL_SIZE: f32 = 12.0;

/// A directed arrow with style attributes and an optional tip label.
#[derive(Clone, Debug)]
pub struct Arrow {
    pub origin: Vec2,
    pub dir: Vec2,
    pub color: Color,
    pub alpha: f32,
    pub style: LineStyle,
    pub label: Option<(String, TextAnchor)>,
}

impl Arrow {
    /// An opaque, solid, unlabelled arrow.
    pub fn new(origin: Vec2, dir: Vec2, color: Color) -> Self {
        Self {
            origin,
            dir,
            color,
            alpha: 1.0,
            style: LineStyle::Solid,
            label: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.style = LineStyle::dashed();
        self
    }

    /// Label the tip. The anchor mirrors the label's horizontal alignment:
    /// `End` places the text to the left of the tip, `Start` to the right.
    pub fn with_label(mut self, label: impl Into<String>, anchor: TextAnchor) -> Self {
        self.label = Some((label.into(), anchor));
        self
    }

    /// The point the arrow ends at.
    pub fn tip(&self) -> Vec2 {
        self.origin + self.dir
    }

    /// Emit the arrow's geometry into a scene: a stroked shaft, a filled
    /// triangular head, and the tip label.
    ///
    /// Zero-length arrows produce no shaft or head (there is no direction to
    /// point a head in), only the label if one is set.
    pub fn tessellate(&self, scene: &mut Scene) {
        let color = self.color.with_alpha(self.alpha);
        let len = self.dir.length();

        if len > 0.0 {
            let unit = self.dir.normalized();
            let perp = unit.perp();
            let tip = self.tip();

            // Shaft stops at the head base so the dash pattern never bleeds
            // into the head triangle.
            let head_len = HEAD_LENGTH.min(len * 0.5);
            let base = tip - unit * head_len;

            let stroke = Stroke::new(color, 1.0).with_style(self.style);
            scene.add_line(self.origin, base, stroke);
            scene.add_polygon(
                &[
                    tip,
                    base + perp * HEAD_HALF_WIDTH,
                    base - perp * HEAD_HALF_WIDTH,
                ],
                color,
            );
        }

        if let Some((label, anchor)) = &self.label {
            let dx = match anchor {
                TextAnchor::End => -LABEL_OFFSET,
                _ => LABEL_OFFSET,
            };
            let pos = self.tip() + Vec2::new(dx, LABEL_OFFSET * 0.5);
            // Labels stay fully opaque even on translucent arrows.
            scene.add_text(pos, label.clone(), LABEL_SIZE, self.color, *anchor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiver_scene::Element;

    fn polygons(scene: &Scene) -> Vec<&Element> {
        scene
            .elements()
            .iter()
            .filter(|e| matches!(e, Element::Path { fill: Some(_), .. }))
            .collect()
    }

    #[test]
    fn arrow_tip() {
        let a = Arrow::new(Vec2::new(2.0, 1.0), Vec2::new(1.0, 3.0), Color::MAGENTA);
        assert_eq!(a.tip(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn tessellate_emits_shaft_head_and_label() {
        let mut scene = Scene::new();
        Arrow::new(Vec2::ZERO, Vec2::new(3.0, 4.0), Color::RED)
            .with_label("v1", TextAnchor::End)
            .tessellate(&mut scene);

        // shaft + head + label
        assert_eq!(scene.len(), 3);
        assert_eq!(polygons(&scene).len(), 1);
        assert!(
            scene
                .elements()
                .iter()
                .any(|e| matches!(e, Element::Text { text, .. } if text == "v1"))
        );
    }

    #[test]
    fn tessellate_head_touches_tip() {
        let mut scene = Scene::new();
        let arrow = Arrow::new(Vec2::ZERO, Vec2::new(3.0, 4.0), Color::RED);
        arrow.tessellate(&mut scene);

        // The head polygon's bounds must reach the arrow tip.
        let head = polygons(&scene)[0].bounds();
        assert!(head.contains(arrow.tip()));
    }

    #[test]
    fn zero_length_arrow_has_no_geometry() {
        let mut scene = Scene::new();
        Arrow::new(Vec2::ZERO, Vec2::ZERO, Color::BLUE).tessellate(&mut scene);
        assert!(scene.is_empty());
    }

    #[test]
    fn zero_length_arrow_keeps_its_label() {
        let mut scene = Scene::new();
        Arrow::new(Vec2::ZERO, Vec2::ZERO, Color::BLUE)
            .with_label("v2", TextAnchor::Start)
            .tessellate(&mut scene);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn short_arrow_head_shrinks() {
        let mut scene = Scene::new();
        Arrow::new(Vec2::ZERO, Vec2::new(0.2, 0.0), Color::GREEN).tessellate(&mut scene);
        // Head must not extend behind the origin.
        let head = polygons(&scene)[0].bounds();
        assert!(head.min.x >= 0.0);
    }

    #[test]
    fn dashed_arrow_strokes_dashed() {
        let mut scene = Scene::new();
        Arrow::new(Vec2::ZERO, Vec2::new(1.0, 3.0), Color::MAGENTA)
            .dashed()
            .tessellate(&mut scene);

        let dashed = scene.elements().iter().any(|e| {
            matches!(
                e,
                Element::Path {
                    stroke: Some(s),
                    ..
                } if matches!(s.style, LineStyle::Dashed { .. })
            )
        });
        assert!(dashed);
    }
}
