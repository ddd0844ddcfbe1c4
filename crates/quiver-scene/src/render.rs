//! Renderer trait and rendering dispatch.

use crate::element::Element;
use crate::path::PathCmd;
use crate::scene::Scene;
use crate::style::{Stroke, TextAnchor};
use crate::types::{Color, Vec2};

/// Trait for rendering scenes.
///
/// Implement this trait to render scenes to your target (terminal canvas,
/// test recorder, ...).
///
/// # Path Model
///
/// Path commands are issued in order: `move_to` starts a new subpath,
/// `line_to` extends it, `close_path` closes it. After the commands of an
/// element, `fill` and/or `stroke` are called to render the accumulated
/// path, then `clear_path`.
pub trait Renderer {
    /// Move to a point (starts a new subpath).
    fn move_to(&mut self, p: Vec2);

    /// Line to a point.
    fn line_to(&mut self, p: Vec2);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Fill the current path.
    fn fill(&mut self, color: Color);

    /// Stroke the current path.
    fn stroke(&mut self, stroke: &Stroke);

    /// Clear the current path without rendering.
    fn clear_path(&mut self);

    /// Render a text run.
    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor);
}

/// Render a scene using the given renderer.
pub fn render<R: Renderer>(scene: &Scene, renderer: &mut R) {
    for elem in scene.elements() {
        render_element(renderer, elem);
    }
}

fn render_element<R: Renderer>(renderer: &mut R, elem: &Element) {
    match elem {
        Element::Path { path, fill, stroke } => {
            for cmd in path.commands() {
                match cmd {
                    PathCmd::MoveTo(p) => renderer.move_to(*p),
                    PathCmd::LineTo(p) => renderer.line_to(*p),
                    PathCmd::Close => renderer.close_path(),
                }
            }

            if let Some(color) = fill {
                renderer.fill(*color);
            }
            if let Some(s) = stroke {
                renderer.stroke(s);
            }

            renderer.clear_path();
        }
        Element::Text {
            pos,
            text,
            size,
            color,
            anchor,
        } => {
            renderer.text(*pos, text, *size, *color, *anchor);
        }
        Element::Group { children } => {
            for child in children {
                render_element(renderer, child);
            }
        }
    }
}
