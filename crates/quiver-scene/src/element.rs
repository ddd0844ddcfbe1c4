//! Scene elements.

use crate::path::Path;
use crate::style::{Stroke, TextAnchor};
use crate::types::{Color, Rect, Vec2};

/// A drawable element in the scene.
#[derive(Clone, Debug)]
pub enum Element {
    /// A path with optional fill and stroke.
    Path {
        path: Path,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// A text run at a position.
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
    /// A group of child elements.
    Group { children: Vec<Element> },
}

impl Element {
    /// Create a filled path element.
    pub fn filled(path: Path, fill: Color) -> Self {
        Element::Path {
            path,
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Create a stroked path element.
    pub fn stroked(path: Path, stroke: Stroke) -> Self {
        Element::Path {
            path,
            fill: None,
            stroke: Some(stroke),
        }
    }

    /// Get the bounding box of this element.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Path { path, stroke, .. } => {
                let b = path.bounds();
                // Expand by half the stroke width if stroked
                match stroke {
                    Some(s) => b.expand(s.width * 0.5),
                    None => b,
                }
            }
            Element::Text {
                pos,
                text,
                size,
                anchor,
                ..
            } => {
                // Rough estimate: each character is about 0.6 * size wide
                let width = text.chars().count() as f32 * size * 0.6;
                let start_x = match anchor {
                    TextAnchor::Start => pos.x,
                    TextAnchor::Middle => pos.x - width * 0.5,
                    TextAnchor::End => pos.x - width,
                };
                Rect::from_bounds(start_x, pos.y - size, start_x + width, pos.y)
            }
            Element::Group { children } => children
                .iter()
                .fold(Rect::EMPTY, |acc, child| acc.union(child.bounds())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineStyle;

    fn triangle() -> Path {
        let mut path = Path::new();
        path.polygon(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(2.0, 3.0),
        ]);
        path
    }

    #[test]
    fn filled_path_bounds() {
        let elem = Element::filled(triangle(), Color::RED);
        let b = elem.bounds();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert_eq!(b.max, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn stroked_path_bounds_expand_by_width() {
        let stroke = Stroke {
            color: Color::WHITE,
            width: 2.0,
            style: LineStyle::Solid,
        };
        let elem = Element::stroked(triangle(), stroke);
        let b = elem.bounds();
        assert_eq!(b.min, Vec2::new(-1.0, -1.0));
        assert_eq!(b.max, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn text_bounds_respect_anchor() {
        let text = |anchor| Element::Text {
            pos: Vec2::new(10.0, 5.0),
            text: "ab".to_string(),
            size: 1.0,
            color: Color::WHITE,
            anchor,
        };
        // 2 chars * 0.6 = 1.2 wide
        assert_eq!(text(TextAnchor::Start).bounds().min.x, 10.0);
        assert!((text(TextAnchor::End).bounds().max.x - 10.0).abs() < 1e-6);
        let mid = text(TextAnchor::Middle).bounds();
        assert!((mid.min.x - 9.4).abs() < 1e-6);
    }

    #[test]
    fn group_bounds_union_children() {
        let group = Element::Group {
            children: vec![
                Element::filled(triangle(), Color::RED),
                Element::Text {
                    pos: Vec2::new(10.0, 10.0),
                    text: "v1".to_string(),
                    size: 1.0,
                    color: Color::RED,
                    anchor: TextAnchor::Start,
                },
            ],
        };
        let b = group.bounds();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert!(b.max.x > 10.0);
    }
}
