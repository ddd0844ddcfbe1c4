//! Scene renderer for the ratatui braille canvas.

use quiver_scene::{Color, LineStyle, Renderer, Stroke, TextAnchor, Vec2};
use ratatui::style::{Color as TuiColor, Style};
use ratatui::text::Span;
use ratatui::widgets::canvas::{Context, Line as CanvasLine};
use unicode_width::UnicodeWidthStr;

/// Renders a scene into a canvas paint context.
///
/// Strokes and fills are rasterized in data coordinates; the canvas maps
/// them onto braille dots. Cell metrics are needed for text anchoring
/// (printing is cell-aligned) and for picking a scanline count that matches
/// the dot resolution.
pub struct CanvasRenderer<'a, 'b> {
    ctx: &'a mut Context<'b>,
    subpaths: Vec<Vec<(f64, f64)>>,
    units_per_cell_x: f64,
    units_per_dot_y: f64,
}

impl<'a, 'b> CanvasRenderer<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, units_per_cell_x: f64, units_per_dot_y: f64) -> Self {
        Self {
            ctx,
            subpaths: Vec::new(),
            units_per_cell_x,
            units_per_dot_y,
        }
    }

    fn current_subpath(&mut self) -> &mut Vec<(f64, f64)> {
        if self.subpaths.is_empty() {
            self.subpaths.push(Vec::new());
        }
        self.subpaths.last_mut().unwrap()
    }

    fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64), color: TuiColor) {
        self.ctx.draw(&CanvasLine {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color,
        });
    }

    fn fill_subpath(&mut self, points: &[(f64, f64)], color: TuiColor) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        // One scanline per dot row covered by the polygon.
        let steps = ((max_y - min_y) / self.units_per_dot_y).ceil() as i32;
        let steps = steps.clamp(1, 200);

        for i in 0..=steps {
            let y = min_y + (max_y - min_y) * (i as f64 / steps as f64);
            let hits = scanline_hits(points, y);
            for pair in hits.chunks(2) {
                if let [x1, x2] = pair {
                    self.draw_segment((*x1, y), (*x2, y), color);
                }
            }
        }
    }
}

impl Renderer for CanvasRenderer<'_, '_> {
    fn move_to(&mut self, p: Vec2) {
        self.subpaths.push(vec![(p.x as f64, p.y as f64)]);
    }

    fn line_to(&mut self, p: Vec2) {
        self.current_subpath().push((p.x as f64, p.y as f64));
    }

    fn close_path(&mut self) {
        let sub = self.current_subpath();
        if let Some(&first) = sub.first()
            && sub.last() != Some(&first)
        {
            sub.push(first);
        }
    }

    fn fill(&mut self, color: Color) {
        let color = to_tui_color(color);
        let subpaths = std::mem::take(&mut self.subpaths);
        for sub in &subpaths {
            self.fill_subpath(sub, color);
        }
        self.subpaths = subpaths;
    }

    fn stroke(&mut self, stroke: &Stroke) {
        let color = to_tui_color(stroke.color);
        let subpaths = std::mem::take(&mut self.subpaths);
        for sub in &subpaths {
            for pair in sub.windows(2) {
                match stroke.style {
                    LineStyle::Solid => self.draw_segment(pair[0], pair[1], color),
                    LineStyle::Dashed { on, off } => {
                        for (from, to) in dash_segments(pair[0], pair[1], on as f64, off as f64) {
                            self.draw_segment(from, to, color);
                        }
                    }
                }
            }
        }
        self.subpaths = subpaths;
    }

    fn clear_path(&mut self) {
        self.subpaths.clear();
    }

    fn text(&mut self, pos: Vec2, text: &str, _size: f32, color: Color, anchor: TextAnchor) {
        let width = text.width() as f64 * self.units_per_cell_x;
        let x = pos.x as f64
            + match anchor {
                TextAnchor::Start => 0.0,
                TextAnchor::Middle => -width * 0.5,
                TextAnchor::End => -width,
            };
        let span = Span::styled(text.to_string(), Style::default().fg(to_tui_color(color)));
        self.ctx.print(x, pos.y as f64, span);
    }
}

/// Map an RGBA scene color to a terminal color.
///
/// Terminal cells have no alpha channel, so translucency is approximated by
/// compositing onto the dark canvas background.
pub fn to_tui_color(c: Color) -> TuiColor {
    let a = c.a as f32 / 255.0;
    TuiColor::Rgb(
        (c.r as f32 * a) as u8,
        (c.g as f32 * a) as u8,
        (c.b as f32 * a) as u8,
    )
}

/// Split a segment into dash runs of `on` units separated by `off` units.
pub fn dash_segments(
    from: (f64, f64),
    to: (f64, f64),
    on: f64,
    off: f64,
) -> Vec<((f64, f64), (f64, f64))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return Vec::new();
    }
    if on <= 0.0 || off < 0.0 {
        return vec![(from, to)];
    }

    let at = |t: f64| (from.0 + dx * (t / len), from.1 + dy * (t / len));

    let mut dashes = Vec::new();
    let mut t = 0.0;
    while t < len {
        let end = (t + on).min(len);
        dashes.push((at(t), at(end)));
        t = end + off;
    }
    dashes
}

/// X coordinates where a horizontal scanline at `y` crosses polygon edges,
/// sorted ascending.
fn scanline_hits(points: &[(f64, f64)], y: f64) -> Vec<f64> {
    let mut hits = Vec::new();
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];

        if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
            hits.push(x1 + (y - y1) * (x2 - x1) / (y2 - y1));
        }
    }
    hits.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_segments_alternate() {
        let dashes = dash_segments((0.0, 0.0), (10.0, 0.0), 2.0, 1.0);
        // 2 on, 1 off => dashes start at 0, 3, 6, 9
        assert_eq!(dashes.len(), 4);
        assert_eq!(dashes[0], ((0.0, 0.0), (2.0, 0.0)));
        assert_eq!(dashes[1].0, (3.0, 0.0));
        // Final dash is clipped to the segment end.
        assert_eq!(dashes[3], ((9.0, 0.0), (10.0, 0.0)));
    }

    #[test]
    fn dash_segments_zero_length() {
        assert!(dash_segments((1.0, 1.0), (1.0, 1.0), 2.0, 1.0).is_empty());
    }

    #[test]
    fn dash_segments_degenerate_pattern_is_solid() {
        let dashes = dash_segments((0.0, 0.0), (4.0, 0.0), 0.0, 1.0);
        assert_eq!(dashes, vec![((0.0, 0.0), (4.0, 0.0))]);
    }

    #[test]
    fn scanline_hits_triangle() {
        let triangle = [(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)];
        let hits = scanline_hits(&triangle, 2.0);
        assert_eq!(hits.len(), 2);
        assert!((hits[0] - 1.0).abs() < 1e-9);
        assert!((hits[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn scanline_hits_outside_polygon() {
        let triangle = [(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)];
        assert!(scanline_hits(&triangle, 5.0).is_empty());
    }

    #[test]
    fn alpha_darkens_toward_background() {
        let full = to_tui_color(Color::MAGENTA);
        let dim = to_tui_color(Color::MAGENTA.with_alpha(0.3));
        let (TuiColor::Rgb(fr, ..), TuiColor::Rgb(dr, ..)) = (full, dim) else {
            panic!("expected rgb colors");
        };
        assert!(dr < fr);
    }
}
