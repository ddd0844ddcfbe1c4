//! The Scene: an ordered list of drawable elements.

use crate::element::Element;
use crate::path::Path;
use crate::style::{Stroke, TextAnchor};
use crate::types::{Color, Rect, Vec2};

/// A complete 2D scene.
///
/// Elements draw in insertion order. The bounding box of everything added so
/// far is cached; the viewbox, when set, is the logical coordinate window a
/// backend should display (overlays like legends may fall outside it).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
    bounds: Rect,
    viewbox: Option<Rect>,
    title: Option<String>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            bounds: Rect::EMPTY,
            viewbox: None,
            title: None,
        }
    }

    /// Get the root elements.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get the number of root elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Get the viewbox, if set.
    pub fn viewbox(&self) -> Option<Rect> {
        self.viewbox
    }

    /// Set the viewbox.
    pub fn set_viewbox(&mut self, viewbox: Rect) {
        self.viewbox = Some(viewbox);
    }

    /// Get the title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Add an element.
    pub fn add(&mut self, element: Element) {
        self.bounds = self.bounds.union(element.bounds());
        self.elements.push(element);
    }

    // ========================================================================
    // Convenience methods for adding common shapes
    // ========================================================================

    /// Add a stroked line segment.
    pub fn add_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let mut path = Path::new();
        path.move_to(from);
        path.line_to(to);
        self.add(Element::stroked(path, stroke));
    }

    /// Add a stroked open polyline.
    pub fn add_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let mut path = Path::new();
        path.polyline(points);
        self.add(Element::stroked(path, stroke));
    }

    /// Add a filled polygon.
    pub fn add_polygon(&mut self, points: &[Vec2], fill: Color) {
        let mut path = Path::new();
        path.polygon(points);
        self.add(Element::filled(path, fill));
    }

    /// Add a text run.
    pub fn add_text(
        &mut self,
        pos: Vec2,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    ) {
        self.add(Element::Text {
            pos,
            text: text.into(),
            size,
            color,
            anchor,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.bounds().is_empty());
        assert!(scene.viewbox().is_none());
        assert!(scene.title().is_none());
    }

    #[test]
    fn scene_add_tracks_bounds() {
        let mut scene = Scene::new();
        scene.add_line(Vec2::ZERO, Vec2::new(3.0, 4.0), Stroke::default());
        scene.add_polygon(
            &[
                Vec2::new(-1.0, 0.0),
                Vec2::new(0.0, 6.0),
                Vec2::new(1.0, 0.0),
            ],
            Color::GREEN,
        );

        assert_eq!(scene.len(), 2);
        let b = scene.bounds();
        assert!(b.min.x <= -1.0);
        assert!(b.max.y >= 6.0);
    }

    #[test]
    fn scene_viewbox_and_title() {
        let mut scene = Scene::new();
        scene.set_viewbox(Rect::from_bounds(-2.0, -2.0, 8.0, 8.0));
        scene.set_title("Vectors");
        assert_eq!(scene.viewbox(), Some(Rect::from_bounds(-2.0, -2.0, 8.0, 8.0)));
        assert_eq!(scene.title(), Some("Vectors"));
    }

    #[test]
    fn scene_text_does_not_panic_on_empty() {
        let mut scene = Scene::new();
        scene.add_text(Vec2::ZERO, "", 1.0, Color::WHITE, TextAnchor::Start);
        assert_eq!(scene.len(), 1);
    }
}
