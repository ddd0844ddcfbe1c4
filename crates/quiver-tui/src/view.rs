//! Frame layout: bordered figure view with a key-hint footer.

use quiver_scene::{Rect as SceneRect, Scene};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::canvas::CanvasRenderer;

/// Render the scene into the whole frame.
pub fn render(frame: &mut Frame, scene: &Scene) {
    let title = scene.title().unwrap_or("Plot");
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    // Reserve space for help text at bottom (1 line)
    let canvas_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let help_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );

    let ([x_min, x_max], [y_min, y_max]) =
        aspect_bounds(view_rect(scene), canvas_area.width, canvas_area.height);

    let units_per_cell_x = (x_max - x_min) / f64::from(canvas_area.width.max(1));
    let units_per_dot_y = (y_max - y_min) / (f64::from(canvas_area.height.max(1)) * 4.0);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([x_min, x_max])
        .y_bounds([y_min, y_max])
        .paint(|ctx| {
            let mut renderer = CanvasRenderer::new(ctx, units_per_cell_x, units_per_dot_y);
            quiver_scene::render(scene, &mut renderer);
        });

    frame.render_widget(canvas, canvas_area);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":quit  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(":close"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, help_area);
}

/// The data window to display: the scene's viewbox, or its bounds with a
/// small margin when no viewbox is set.
fn view_rect(scene: &Scene) -> SceneRect {
    if let Some(viewbox) = scene.viewbox() {
        return viewbox;
    }
    let b = scene.bounds();
    if b.is_empty() {
        SceneRect::from_bounds(0.0, 0.0, 100.0, 100.0)
    } else {
        b.expand((b.width().max(b.height()) * 0.05).max(1.0))
    }
}

/// Widen the view on one axis so a data unit spans the same number of
/// braille dots horizontally and vertically (equal x/y scaling, so angles
/// are visually accurate). Cells are 2 dots wide and 4 tall.
fn aspect_bounds(view: SceneRect, cols: u16, rows: u16) -> ([f64; 2], [f64; 2]) {
    let w = f64::from(view.width());
    let h = f64::from(view.height());
    let dots_x = f64::from(cols) * 2.0;
    let dots_y = f64::from(rows) * 4.0;

    if w <= 0.0 || h <= 0.0 || dots_x <= 0.0 || dots_y <= 0.0 {
        return (
            [f64::from(view.min.x), f64::from(view.max.x)],
            [f64::from(view.min.y), f64::from(view.max.y)],
        );
    }

    let per_dot = (w / dots_x).max(h / dots_y);
    let half_w = per_dot * dots_x * 0.5;
    let half_h = per_dot * dots_y * 0.5;
    let cx = f64::from(view.min.x + view.max.x) * 0.5;
    let cy = f64::from(view.min.y + view.max.y) * 0.5;

    ([cx - half_w, cx + half_w], [cy - half_h, cy + half_h])
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiver_scene::{Stroke, Vec2};

    const EPS: f64 = 1e-9;

    #[test]
    fn aspect_bounds_equalize_units_per_dot() {
        let view = SceneRect::from_bounds(-2.0, -2.0, 8.0, 8.0);
        let ([x0, x1], [y0, y1]) = aspect_bounds(view, 40, 40);

        let per_dot_x = (x1 - x0) / (40.0 * 2.0);
        let per_dot_y = (y1 - y0) / (40.0 * 4.0);
        assert!((per_dot_x - per_dot_y).abs() < EPS);
    }

    #[test]
    fn aspect_bounds_contain_the_view() {
        let view = SceneRect::from_bounds(-2.0, -2.0, 8.0, 11.0);
        let ([x0, x1], [y0, y1]) = aspect_bounds(view, 60, 20);

        assert!(x0 <= -2.0 && x1 >= 8.0);
        assert!(y0 <= -2.0 && y1 >= 11.0);
    }

    #[test]
    fn aspect_bounds_keep_center() {
        let view = SceneRect::from_bounds(0.0, 0.0, 10.0, 10.0);
        let ([x0, x1], [y0, y1]) = aspect_bounds(view, 33, 17);

        assert!(((x0 + x1) * 0.5 - 5.0).abs() < EPS);
        assert!(((y0 + y1) * 0.5 - 5.0).abs() < EPS);
    }

    #[test]
    fn aspect_bounds_degenerate_area_falls_back() {
        let view = SceneRect::from_bounds(-2.0, -2.0, 8.0, 8.0);
        let ([x0, x1], [y0, y1]) = aspect_bounds(view, 0, 0);
        assert_eq!([x0, x1], [-2.0, 8.0]);
        assert_eq!([y0, y1], [-2.0, 8.0]);
    }

    #[test]
    fn view_rect_prefers_viewbox() {
        let mut scene = Scene::new();
        scene.add_line(Vec2::ZERO, Vec2::new(50.0, 50.0), Stroke::default());
        scene.set_viewbox(SceneRect::from_bounds(-2.0, -2.0, 8.0, 8.0));
        assert_eq!(view_rect(&scene), SceneRect::from_bounds(-2.0, -2.0, 8.0, 8.0));
    }

    #[test]
    fn view_rect_pads_bare_bounds() {
        let mut scene = Scene::new();
        scene.add_line(Vec2::ZERO, Vec2::new(10.0, 10.0), Stroke::default());
        let v = view_rect(&scene);
        assert!(v.min.x < 0.0);
        assert!(v.max.x > 10.0);
    }

    #[test]
    fn view_rect_of_empty_scene() {
        let v = view_rect(&Scene::new());
        assert_eq!(v, SceneRect::from_bounds(0.0, 0.0, 100.0, 100.0));
    }
}
