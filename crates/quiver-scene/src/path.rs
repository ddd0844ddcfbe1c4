//! Path representation and commands.

use crate::types::{Rect, Vec2};

/// A path command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move to a point (starts a new subpath).
    MoveTo(Vec2),
    /// Line to a point.
    LineTo(Vec2),
    /// Close the current subpath.
    Close,
}

/// A polyline path consisting of multiple commands.
///
/// The bounding box is tracked incrementally as commands are added.
#[derive(Clone, Debug, Default)]
pub struct Path {
    cmds: Vec<PathCmd>,
    bounds: Rect,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            cmds: Vec::new(),
            bounds: Rect::EMPTY,
        }
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Get the bounding box of the path.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Move to a point (starts a new subpath).
    pub fn move_to(&mut self, p: Vec2) {
        self.cmds.push(PathCmd::MoveTo(p));
        self.bounds.include(p);
    }

    /// Line to a point.
    pub fn line_to(&mut self, p: Vec2) {
        self.cmds.push(PathCmd::LineTo(p));
        self.bounds.include(p);
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// Add an open polyline as a subpath.
    pub fn polyline(&mut self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
    }

    /// Add a closed polygon as a subpath.
    pub fn polygon(&mut self, points: &[Vec2]) {
        if points.is_empty() {
            return;
        }
        self.polyline(points);
        self.close();
    }

    /// Add an axis-aligned rectangle as a subpath.
    pub fn rect(&mut self, r: Rect) {
        self.polygon(&[
            r.min,
            Vec2::new(r.max.x, r.min.y),
            r.max,
            Vec2::new(r.min.x, r.max.y),
        ]);
    }
}
